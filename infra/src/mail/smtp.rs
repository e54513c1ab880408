//! SMTP mail sender
//!
//! Wraps `lettre::AsyncSmtpTransport<Tokio1Executor>`. With credentials the
//! connection is upgraded with STARTTLS; without them it talks plain SMTP,
//! which is only meant for local relays such as Mailpit.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use ia_core::{EmailMessage, MailSender, NotificationError};
use ia_shared::MailConfig;

use crate::InfrastructureError;

/// SMTP mail sender
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailSender {
    /// Plain SMTP without TLS or authentication
    ///
    /// # Arguments
    ///
    /// * `host` - SMTP relay host name
    /// * `port` - SMTP relay port (1025 for Mailpit)
    /// * `from_address` - Sender mailbox, e.g. `InsurAi <no-reply@insurai.local>`
    pub fn new(host: &str, port: u16, from_address: &str) -> Result<Self, InfrastructureError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Ok(Self {
            transport,
            from: parse_from(from_address)?,
        })
    }

    /// Builds the transport described by a [`MailConfig`]
    pub fn from_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let (username, password) = match (&config.smtp_username, &config.smtp_password) {
            (Some(username), Some(password)) => (username, password),
            _ => return Self::new(&config.smtp_host, config.smtp_port, &config.from_address),
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Mail(format!("Invalid SMTP relay: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(username.clone(), password.clone()))
            .build();

        Ok(Self {
            transport,
            from: parse_from(&config.from_address)?,
        })
    }

    /// The sender mailbox
    pub fn from_mailbox(&self) -> &Mailbox {
        &self.from
    }

    pub(crate) fn build_message(&self, email: &EmailMessage) -> Result<Message, NotificationError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| NotificationError::InvalidAddress(format!("{}: {}", email.to, e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| NotificationError::SendFailed(format!("Failed to build message: {}", e)))
    }
}

fn parse_from(address: &str) -> Result<Mailbox, InfrastructureError> {
    address
        .parse()
        .map_err(|e| InfrastructureError::Mail(format!("Invalid from address {}: {}", address, e)))
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP delivery failed: {}", e)))?;

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "smtp"
    }
}
