//! Shared utilities and common types for the InsurAi backend
//!
//! This crate provides common functionality used across all backend crates:
//! - Configuration types loaded from environment variables
//! - Email address validation and masking helpers

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    MailBackend, MailConfig, PasswordConfig,
};
pub use utils::email;
