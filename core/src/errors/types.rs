//! Error types for employee authentication, token handling and notifications
//!
//! The verifier's public boolean/option API collapses all of these into a
//! negative result. They surface only through the typed verification API
//! and in log events, where `reason()` gives a stable, low-cardinality label.

use thiserror::Error;

/// Token decoding and signing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token not yet valid")]
    NotYetValid,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token has no subject")]
    MissingSubject,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// Stable label for logging
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Expired => "expired",
            TokenError::NotYetValid => "not_yet_valid",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Malformed(_) => "malformed",
            TokenError::MissingSubject => "missing_subject",
            TokenError::GenerationFailed => "generation_failed",
        }
    }
}

/// Bearer verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authorization header missing")]
    MissingHeader,

    #[error("Authorization header is not a bearer credential")]
    InvalidScheme,

    #[error("Bearer token is empty")]
    EmptyToken,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("No employee matches the token subject")]
    UnknownSubject,

    #[error("Employee lookup failed: {0}")]
    Repository(String),

    #[error("Employee already registered: {email}")]
    AlreadyRegistered { email: String },
}

impl AuthError {
    /// Stable label for logging
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "missing_header",
            AuthError::InvalidScheme => "invalid_scheme",
            AuthError::EmptyToken => "empty_token",
            AuthError::Token(e) => e.reason(),
            AuthError::UnknownSubject => "unknown_subject",
            AuthError::Repository(_) => "repository",
            AuthError::AlreadyRegistered { .. } => "already_registered",
        }
    }
}

/// Notification rendering and delivery errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Template rendering failed: {0}")]
    TemplateFailed(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Mail delivery failed: {0}")]
    SendFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_reason_delegates_to_token() {
        assert_eq!(AuthError::Token(TokenError::Expired).reason(), "expired");
        assert_eq!(
            AuthError::Token(TokenError::Malformed("bad".to_string())).reason(),
            "malformed"
        );
        assert_eq!(AuthError::InvalidScheme.reason(), "invalid_scheme");
    }

    #[test]
    fn test_notification_error_messages() {
        let error = NotificationError::SendFailed("connection refused".to_string());
        assert_eq!(error.to_string(), "Mail delivery failed: connection refused");
    }
}
