//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, NotificationError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridged_errors_are_transparent() {
        let error: DomainError = TokenError::Expired.into();
        assert_eq!(error.to_string(), "Token expired");

        let error: DomainError = AuthError::UnknownSubject.into();
        assert_eq!(error.to_string(), "No employee matches the token subject");
    }

    #[test]
    fn test_domain_error_messages() {
        let error = DomainError::NotFound {
            resource: "Employee".to_string(),
        };
        assert_eq!(error.to_string(), "Resource not found: Employee");

        let error = DomainError::Database("connection reset".to_string());
        assert_eq!(error.to_string(), "Database error: connection reset");
    }
}
