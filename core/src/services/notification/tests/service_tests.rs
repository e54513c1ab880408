//! Unit tests for the notification service

use std::sync::Arc;

use super::fixtures::{claim, hr, query};
use crate::services::notification::{
    MailSender, Notification, NotificationService, RecordingMailSender,
};

fn service_with(sender: &RecordingMailSender) -> NotificationService {
    let sender: Arc<dyn MailSender> = Arc::new(sender.clone());
    NotificationService::with_sender(sender).unwrap()
}

#[tokio::test]
async fn test_each_entry_point_sends_one_message() {
    let sender = RecordingMailSender::new();
    let service = service_with(&sender);
    let hr = hr();

    service
        .send_claim_status_email("priya@example.com", &claim("Approved"))
        .await;
    service
        .send_new_claim_assigned_to_hr("rahul.hr@example.com", Some(&hr), &claim("Pending"))
        .await;
    service
        .send_employee_query_to_agent("agent@example.com", &query())
        .await;
    service
        .send_agent_response_to_employee("priya@example.com", &query())
        .await;

    let sent = sender.sent().await;
    let subjects: Vec<&str> = sent.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(
        subjects,
        vec![
            "InsurAi: Claim #1001 Approved",
            "InsurAi: New Claim Assigned - #1001",
            "InsurAi: New Query from Employee #42",
            "InsurAi: Response to Your Query #55",
        ]
    );
    assert_eq!(sent[1].to, "rahul.hr@example.com");
    assert!(!sent[0].text_body.is_empty());
}

#[tokio::test]
async fn test_send_failure_is_swallowed() {
    let sender = RecordingMailSender::failing();
    let service = service_with(&sender);

    // Returns normally even though delivery fails
    service
        .send_claim_status_email("priya@example.com", &claim("Rejected"))
        .await;
    service
        .send_agent_response_to_employee("priya@example.com", &query())
        .await;

    assert_eq!(sender.count().await, 0);

    sender.set_failing(false);
    service
        .send_claim_status_email("priya@example.com", &claim("Rejected"))
        .await;
    assert_eq!(sender.count().await, 1);
}

#[tokio::test]
async fn test_invalid_recipient_is_skipped() {
    let sender = RecordingMailSender::new();
    let service = service_with(&sender);

    service.send_claim_status_email("", &claim("Approved")).await;
    service
        .send_employee_query_to_agent("not an address", &query())
        .await;

    assert_eq!(sender.count().await, 0);
}

#[tokio::test]
async fn test_notify_dispatches_owned_event() {
    let sender = RecordingMailSender::new();
    let service = service_with(&sender);

    let notification = Notification::ClaimAssigned {
        to: "hr@example.com".to_string(),
        hr: None,
        claim: claim("Pending"),
    };
    service.notify(&notification).await;

    let sent = sender.sent().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html_body.contains("Dear HR,"));
}

#[tokio::test]
async fn test_spawn_runs_detached() {
    let sender = RecordingMailSender::new();
    let service = Arc::new(service_with(&sender));

    let handles: Vec<_> = (0..3)
        .map(|_| {
            service.spawn(Notification::QuerySubmitted {
                to: "agent@example.com".to_string(),
                query: query(),
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(sender.count().await, 3);
}

#[test]
fn test_notification_accessors() {
    let notification = Notification::ClaimStatus {
        to: "priya@example.com".to_string(),
        claim: claim("Approved"),
    };

    assert_eq!(notification.recipient(), "priya@example.com");
    assert_eq!(notification.reference_id(), 1001);
    assert_eq!(notification.kind().to_string(), "claim_status");
}
