//! Logging mail sender for development and tests

use async_trait::async_trait;

use ia_core::{EmailMessage, MailSender, NotificationError};
use ia_shared::email::mask_email;

/// Mail sender that only logs
///
/// Useful when no SMTP relay is available; the message body is logged at
/// debug level.
#[derive(Debug, Clone, Default)]
pub struct LogMailSender;

impl LogMailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(
            to = %mask_email(&message.to),
            subject = %message.subject,
            "Mail delivery skipped (log backend)"
        );
        tracing::debug!(body = %message.text_body, "Skipped mail body");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "log"
    }
}
