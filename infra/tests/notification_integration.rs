//! Integration tests wiring the notification service to infra senders

use ia_core::{Claim, Notification, NotificationService};
use ia_infra::mail::create_mail_sender;
use ia_shared::MailConfig;

fn claim() -> Claim {
    Claim {
        id: 31,
        title: "Accident".to_string(),
        status: "Rejected".to_string(),
        amount: 4500.0,
        claim_date: None,
        remarks: Some("Policy lapsed".to_string()),
        employee: None,
        policy: None,
        assigned_hr: None,
    }
}

#[test]
fn test_log_backend_dispatch_completes() {
    let sender = create_mail_sender(&MailConfig::default());
    let service = NotificationService::with_sender(sender).unwrap();

    tokio_test::block_on(async {
        service.send_claim_status_email("employee@example.com", &claim()).await;
        service
            .notify(&Notification::ClaimAssigned {
                to: "hr@example.com".to_string(),
                hr: None,
                claim: claim(),
            })
            .await;
    });
}
