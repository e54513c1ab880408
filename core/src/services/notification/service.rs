//! Notification service

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use ia_shared::email::{is_valid_email, mask_email};

use crate::domain::entities::claim::{Claim, Hr};
use crate::domain::entities::employee_query::EmployeeQuery;
use crate::errors::NotificationError;

use super::message::{EmailMessage, Notification, NotificationKind};
use super::renderer::TemplateRenderer;
use super::sender::MailSender;

/// Notification dispatcher
///
/// Every entry point returns `()`: rendering and delivery failures are
/// logged and swallowed so the calling business operation never fails
/// because of mail.
pub struct NotificationService {
    sender: Arc<dyn MailSender>,
    renderer: TemplateRenderer,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn MailSender>, renderer: TemplateRenderer) -> Self {
        Self { sender, renderer }
    }

    /// Builds a service with the embedded templates
    pub fn with_sender(sender: Arc<dyn MailSender>) -> Result<Self, NotificationError> {
        Ok(Self::new(sender, TemplateRenderer::new()?))
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// Tells an employee that their claim changed status
    pub async fn send_claim_status_email(&self, to: &str, claim: &Claim) {
        let rendered = self.renderer.claim_status(to, claim);
        self.deliver(NotificationKind::ClaimStatus, to, claim.id, rendered)
            .await;
    }

    /// Tells an HR reviewer that a claim was assigned to them
    pub async fn send_new_claim_assigned_to_hr(&self, to: &str, hr: Option<&Hr>, claim: &Claim) {
        let rendered = self.renderer.claim_assigned(to, hr, claim);
        self.deliver(NotificationKind::ClaimAssigned, to, claim.id, rendered)
            .await;
    }

    /// Forwards a new employee query to an agent
    pub async fn send_employee_query_to_agent(&self, to: &str, query: &EmployeeQuery) {
        let rendered = self.renderer.query_submitted(to, query);
        self.deliver(NotificationKind::QuerySubmitted, to, query.id, rendered)
            .await;
    }

    /// Sends an agent's answer back to the employee
    pub async fn send_agent_response_to_employee(&self, to: &str, query: &EmployeeQuery) {
        let rendered = self.renderer.query_answered(to, query);
        self.deliver(NotificationKind::QueryAnswered, to, query.id, rendered)
            .await;
    }

    /// Dispatches an owned notification event
    pub async fn notify(&self, notification: &Notification) {
        match notification {
            Notification::ClaimStatus { to, claim } => {
                self.send_claim_status_email(to, claim).await
            }
            Notification::ClaimAssigned { to, hr, claim } => {
                self.send_new_claim_assigned_to_hr(to, hr.as_ref(), claim)
                    .await
            }
            Notification::QuerySubmitted { to, query } => {
                self.send_employee_query_to_agent(to, query).await
            }
            Notification::QueryAnswered { to, query } => {
                self.send_agent_response_to_employee(to, query).await
            }
        }
    }

    /// Sends on a detached task
    ///
    /// The caller may drop the handle; it exists so tests and shutdown
    /// code can wait for delivery.
    pub fn spawn(self: &Arc<Self>, notification: Notification) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.notify(&notification).await })
    }

    async fn deliver(
        &self,
        kind: NotificationKind,
        to: &str,
        reference_id: i64,
        rendered: Result<EmailMessage, NotificationError>,
    ) {
        if !is_valid_email(to) {
            warn!(
                notification.kind = %kind,
                notification.reference_id = reference_id,
                recipient = %mask_email(to),
                "Skipping notification with invalid recipient"
            );
            return;
        }

        let message = match rendered {
            Ok(message) => message,
            Err(e) => {
                error!(
                    error = %e,
                    notification.kind = %kind,
                    notification.reference_id = reference_id,
                    "Failed to render notification"
                );
                return;
            }
        };

        match self.sender.send(&message).await {
            Ok(()) => info!(
                notification.kind = %kind,
                notification.reference_id = reference_id,
                recipient = %mask_email(to),
                provider = self.sender.provider_name(),
                "Notification sent"
            ),
            Err(e) => error!(
                error = %e,
                notification.kind = %kind,
                notification.reference_id = reference_id,
                recipient = %mask_email(to),
                provider = self.sender.provider_name(),
                "Failed to send notification"
            ),
        }
    }
}
