//! Token entities for JWT-based employee authentication.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for JWT payload
///
/// Only `sub` is required. `exp` is validated when present; tokens issued
/// without it never expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (employee email)
    #[serde(default)]
    pub sub: String,

    /// Issued at timestamp
    #[serde(default)]
    pub iat: i64,

    /// Expiration timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Creates claims for an employee access token
    ///
    /// # Arguments
    ///
    /// * `email` - The employee email used as subject
    /// * `expiry_seconds` - Lifetime in seconds, `0` for no `exp` claim
    /// * `issuer` - Optional issuer claim
    pub fn for_employee(email: impl Into<String>, expiry_seconds: i64, issuer: Option<String>) -> Self {
        let now = Utc::now();
        let exp = (expiry_seconds > 0).then(|| (now + Duration::seconds(expiry_seconds)).timestamp());

        Self {
            sub: email.into(),
            iat: now.timestamp(),
            exp,
            iss: issuer,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        self.exp.is_some_and(|exp| Utc::now().timestamp() >= exp)
    }
}

/// Legacy, unsigned employee token
///
/// Base64 of `"{identifier}:{unix_millis}"`. Anyone can forge one, so it
/// carries no authority: it exists only for clients that still expect the
/// old format and is never accepted by the token verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyEmployeeToken(String);

impl LegacyEmployeeToken {
    /// Encodes an identifier with the current timestamp
    pub fn generate(identifier: &str) -> Self {
        Self::encode(identifier, Utc::now().timestamp_millis())
    }

    pub(crate) fn encode(identifier: &str, timestamp_millis: i64) -> Self {
        let data = format!("{}:{}", identifier, timestamp_millis);
        Self(STANDARD.encode(data.as_bytes()))
    }

    /// Decodes the token back into identifier and timestamp
    ///
    /// Splits on the last colon so identifiers may contain colons.
    pub fn decode(&self) -> Option<(String, i64)> {
        let bytes = STANDARD.decode(&self.0).ok()?;
        let data = String::from_utf8(bytes).ok()?;
        let (identifier, millis) = data.rsplit_once(':')?;
        Some((identifier.to_string(), millis.parse().ok()?))
    }

    /// The encoded token string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LegacyEmployeeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
