//! Authentication configuration: JWT signing and password hashing

use serde::{Deserialize, Serialize};

use super::{optional_env, parse_env_or, ConfigError};

/// Default access token lifetime in seconds (24 hours)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 86_400;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// JWT authentication configuration
///
/// The signing secret is always injected. There is deliberately no `Default`
/// implementation so a placeholder secret can never end up in a binary.
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    #[serde(skip_serializing)]
    pub secret: String,

    /// Access token expiry time in seconds, `0` issues tokens without `exp`
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,

    /// JWT issuer claim, validated only when set
    #[serde(default)]
    pub issuer: Option<String>,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
            issuer: None,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Issue tokens without an `exp` claim
    pub fn without_expiry(mut self) -> Self {
        self.access_token_expiry = 0;
        self
    }

    /// Set the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Create from environment variables
    ///
    /// `JWT_SECRET` is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = optional_env("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let access_token_expiry =
            parse_env_or("JWT_ACCESS_TOKEN_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?;
        if access_token_expiry < 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_TOKEN_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        Ok(Self {
            secret,
            access_token_expiry,
            issuer: optional_env("JWT_ISSUER"),
        })
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl PasswordConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bcrypt_cost = parse_env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }
        Ok(Self { bcrypt_cost })
    }
}

fn default_access_token_expiry() -> i64 {
    DEFAULT_ACCESS_TOKEN_EXPIRY
}
