//! Outgoing mail configuration

use serde::{Deserialize, Serialize};

use super::{optional_env, parse_env_or, ConfigError};

/// Mail delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailBackend {
    /// Deliver through an SMTP relay
    Smtp,
    /// Log messages instead of delivering them
    Log,
}

impl std::str::FromStr for MailBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(MailBackend::Smtp),
            "log" => Ok(MailBackend::Log),
            _ => Err(format!("Unknown mail backend: {}", s)),
        }
    }
}

/// Mail transport configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Delivery backend
    pub backend: MailBackend,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port
    pub smtp_port: u16,

    /// SMTP username, enables STARTTLS authentication when set
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[serde(default, skip_serializing)]
    pub smtp_password: Option<String>,

    /// Sender address for all notifications
    pub from_address: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            backend: MailBackend::Log,
            smtp_host: String::from("localhost"),
            smtp_port: 1025,
            smtp_username: None,
            smtp_password: None,
            from_address: String::from("InsurAi <no-reply@insurai.local>"),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let backend = match optional_env("MAIL_BACKEND") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "MAIL_BACKEND", value })?,
            None => defaults.backend,
        };

        Ok(Self {
            backend,
            smtp_host: optional_env("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: parse_env_or("SMTP_PORT", defaults.smtp_port)?,
            smtp_username: optional_env("SMTP_USERNAME"),
            smtp_password: optional_env("SMTP_PASSWORD"),
            from_address: optional_env("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
        })
    }

    /// Check whether SMTP credentials are configured
    pub fn has_credentials(&self) -> bool {
        self.smtp_username.is_some() && self.smtp_password.is_some()
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("backend", &self.backend)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &self.smtp_password.as_ref().map(|_| "<redacted>"))
            .field("from_address", &self.from_address)
            .finish()
    }
}
