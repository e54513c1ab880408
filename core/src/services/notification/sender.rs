//! Mail transport abstraction

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::NotificationError;

use super::message::EmailMessage;

/// Mail transport used by the notification dispatcher
///
/// Implementations live in the infrastructure layer (SMTP, logging) and
/// below ([`RecordingMailSender`]).
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Delivers one message
    async fn send(&self, message: &EmailMessage) -> Result<(), NotificationError>;

    /// Short transport name for logs
    fn provider_name(&self) -> &'static str;
}

/// In-memory sender that records every message
///
/// Can be switched into a failing mode to exercise error paths.
#[derive(Clone, Default)]
pub struct RecordingMailSender {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingMailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender whose every delivery fails
    pub fn failing() -> Self {
        let sender = Self::new();
        sender.set_failing(true);
        sender
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages delivered so far
    pub async fn sent(&self) -> Vec<EmailMessage> {
        self.sent.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.sent.read().await.len()
    }

    pub async fn clear(&self) {
        self.sent.write().await.clear();
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::SendFailed(
                "simulated delivery failure".to_string(),
            ));
        }

        self.sent.write().await.push(message.clone());
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}
