//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outgoing mail transport configuration
//!
//! Every section is read from environment variables. The JWT signing secret
//! has no default and must always be supplied by the deployment.

pub mod auth;
pub mod database;
pub mod environment;
pub mod mail;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailBackend, MailConfig};

/// Errors raised while reading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Mail transport configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Fails when `JWT_SECRET` is missing or any numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        Ok(Self {
            environment,
            jwt: JwtConfig::from_env()?,
            password: PasswordConfig::from_env()?,
            mail: MailConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::from_env(environment)?,
        })
    }
}

/// Reads an optional variable and parses it, falling back to `default` when unset
pub(crate) fn parse_env_or<T: std::str::FromStr>(
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

/// Reads an optional, non-empty variable
pub(crate) fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_or_default_when_unset() {
        let value: u32 = parse_env_or("IA_TEST_UNSET_NUMBER", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_or_rejects_garbage() {
        std::env::set_var("IA_TEST_GARBAGE_NUMBER", "forty-two");
        let result: Result<u32, _> = parse_env_or("IA_TEST_GARBAGE_NUMBER", 1);
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key: "IA_TEST_GARBAGE_NUMBER",
                value: "forty-two".to_string(),
            })
        );
        std::env::remove_var("IA_TEST_GARBAGE_NUMBER");
    }

    #[test]
    fn test_optional_env_ignores_blank() {
        std::env::set_var("IA_TEST_BLANK", "   ");
        assert_eq!(optional_env("IA_TEST_BLANK"), None);
        std::env::remove_var("IA_TEST_BLANK");
    }
}
