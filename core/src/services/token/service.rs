//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use ia_shared::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Service for issuing and verifying employee JWTs
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - JWT secret, lifetime and optional issuer
    ///
    /// # Returns
    ///
    /// A new `TokenService` or an error if the secret is empty
    pub fn new(config: JwtConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::Validation {
                message: "JWT secret must not be empty".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` and `nbf` are checked when present but not required
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;
        validation.validate_aud = false;
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer.as_str()]);
            validation.required_spec_claims.insert("iss".to_string());
        }

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// The configuration this service was built from
    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Issues a signed access token for an employee email
    ///
    /// # Arguments
    ///
    /// * `email` - The employee email used as subject
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT
    /// * `Err(TokenError)` - Signing failed
    pub fn issue(&self, email: &str) -> Result<String, TokenError> {
        let claims = Claims::for_employee(
            email,
            self.config.access_token_expiry,
            self.config.issuer.clone(),
        );
        self.encode_claims(&claims)
    }

    /// Signs arbitrary claims with the configured secret
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)
    }

    /// Verifies a token and returns its claims
    ///
    /// Signature, expiry and not-before (when present) and issuer (when
    /// configured) are checked with no clock leeway. A token without a
    /// non-empty subject is rejected.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The verified claims
    /// * `Err(TokenError)` - Why the token was rejected
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed(e.to_string()),
            }
        })?;

        if data.claims.sub.trim().is_empty() {
            return Err(TokenError::MissingSubject);
        }

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
