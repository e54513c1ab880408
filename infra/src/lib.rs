//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `ia_core`:
//!
//! - **Database**: MySQL employee repository using SQLx
//! - **Mail**: SMTP delivery via lettre, or a logging sender for development
//! - **Telemetry**: tracing-subscriber initialisation
//! - **Configuration**: `.env` loading on top of the shared config types
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

#[cfg(feature = "mysql")]
use std::sync::Arc;

#[cfg(feature = "mysql")]
use anyhow::Context;

#[cfg(feature = "mysql")]
use ia_core::{EmployeeService, NotificationService, TokenService};
use ia_shared::{AppConfig, ConfigError, Environment};

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail transport implementations
pub mod mail;

/// Tracing subscriber setup
pub mod telemetry;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Mail transport setup error
    #[error("Mail transport error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

/// Load application configuration from the environment
///
/// Reads `.env.<environment>` and then `.env` when present; variables
/// already set in the process environment win.
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    Ok(AppConfig::from_env()?)
}

/// Wired services for a running backend
#[cfg(feature = "mysql")]
pub struct InfrastructureServices {
    /// Employee verifier backed by MySQL
    pub employees: EmployeeService<database::MySqlEmployeeRepository>,
    /// Notification dispatcher
    pub notifications: Arc<NotificationService>,
    /// Password hasher configured from `BCRYPT_COST`
    pub password_hasher: ia_core::BcryptPasswordHasher,
}

/// Initialize infrastructure services
///
/// Connects the database pool, builds the token codec from the injected
/// secret and selects the mail transport.
#[cfg(feature = "mysql")]
pub async fn initialize(config: &AppConfig) -> anyhow::Result<InfrastructureServices> {
    tracing::info!(environment = %config.environment, "Initializing infrastructure services");

    let pool = database::DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    let repository = database::MySqlEmployeeRepository::new(pool.get_pool().clone());

    let token_service =
        TokenService::new(config.jwt.clone()).context("invalid JWT configuration")?;

    let sender = mail::create_mail_sender(&config.mail);
    let notifications = NotificationService::with_sender(sender)
        .context("failed to load notification templates")?;

    tracing::info!("Infrastructure services initialized successfully");

    Ok(InfrastructureServices {
        employees: EmployeeService::new(repository, token_service),
        notifications: Arc::new(notifications),
        password_hasher: ia_core::BcryptPasswordHasher::from(&config.password),
    })
}
