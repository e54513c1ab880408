//! Mail Transport Module
//!
//! Implementations of [`ia_core::MailSender`] used by the notification
//! dispatcher.
//!
//! - **SMTP**: lettre async transport, STARTTLS when credentials are set
//! - **Log**: records the message in the log and drops it (development)
//! - **Security**: recipient addresses are masked in logs

use std::sync::Arc;

use ia_core::MailSender;
use ia_shared::{MailBackend, MailConfig};

pub mod logging;
pub mod smtp;

pub use logging::LogMailSender;
pub use smtp::SmtpMailSender;

#[cfg(test)]
mod tests;

/// Create a mail sender based on configuration
///
/// Falls back to [`LogMailSender`] when the SMTP transport cannot be
/// built, so a bad mail setup never prevents startup.
///
/// # Arguments
///
/// * `config` - Mail configuration containing backend and SMTP settings
///
/// # Returns
///
/// A shared mail sender implementation
pub fn create_mail_sender(config: &MailConfig) -> Arc<dyn MailSender> {
    match config.backend {
        MailBackend::Smtp => match SmtpMailSender::from_config(config) {
            Ok(sender) => {
                tracing::info!(
                    host = %config.smtp_host,
                    port = config.smtp_port,
                    authenticated = config.has_credentials(),
                    "Using SMTP mail sender"
                );
                Arc::new(sender)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to build SMTP transport, falling back to log sender");
                Arc::new(LogMailSender::new())
            }
        },
        MailBackend::Log => {
            tracing::info!("Using log mail sender, messages will not be delivered");
            Arc::new(LogMailSender::new())
        }
    }
}
