//! Tests for mail sender selection

use ia_core::{EmailMessage, MailSender};
use ia_shared::{MailBackend, MailConfig};

use crate::mail::{create_mail_sender, LogMailSender};

fn message() -> EmailMessage {
    EmailMessage {
        to: "priya@example.com".to_string(),
        subject: "InsurAi: Claim #1 Approved".to_string(),
        html_body: "<p>Approved</p>".to_string(),
        text_body: "Approved".to_string(),
    }
}

#[test]
fn test_log_backend_by_default() {
    let sender = create_mail_sender(&MailConfig::default());
    assert_eq!(sender.provider_name(), "log");
}

#[test]
fn test_smtp_backend() {
    let config = MailConfig {
        backend: MailBackend::Smtp,
        ..MailConfig::default()
    };

    let sender = create_mail_sender(&config);
    assert_eq!(sender.provider_name(), "smtp");
}

#[test]
fn test_smtp_with_credentials_uses_smtp() {
    let config = MailConfig {
        backend: MailBackend::Smtp,
        smtp_host: "smtp.example.com".to_string(),
        smtp_port: 587,
        smtp_username: Some("mailer".to_string()),
        smtp_password: Some("secret".to_string()),
        ..MailConfig::default()
    };

    let sender = create_mail_sender(&config);
    assert_eq!(sender.provider_name(), "smtp");
}

#[test]
fn test_bad_from_address_falls_back_to_log() {
    let config = MailConfig {
        backend: MailBackend::Smtp,
        from_address: "not a mailbox".to_string(),
        ..MailConfig::default()
    };

    let sender = create_mail_sender(&config);
    assert_eq!(sender.provider_name(), "log");
}

#[tokio::test]
async fn test_log_sender_never_fails() {
    let sender = LogMailSender::new();
    assert!(sender.send(&message()).await.is_ok());
}
