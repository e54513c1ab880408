//! Integration tests for claim and query notifications

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use ia_core::{
        Claim, Employee, EmployeeQuery, Hr, MailSender, Notification, NotificationService,
        RecordingMailSender,
    };

    fn claim() -> Claim {
        Claim {
            id: 7,
            title: "Maternity".to_string(),
            status: "Approved".to_string(),
            amount: 120000.0,
            claim_date: NaiveDate::from_ymd_opt(2025, 1, 20).and_then(|d| d.and_hms_opt(9, 5, 0)),
            remarks: Some("Settled in full".to_string()),
            employee: Some(Employee::new("EMP-7", "Meera", "meera@example.com", "x")),
            policy: None,
            assigned_hr: Some(Hr {
                id: 2,
                name: "Arjun".to_string(),
                email: "arjun@example.com".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_claim_lifecycle_notifications() {
        let sender = RecordingMailSender::new();
        let mail: Arc<dyn MailSender> = Arc::new(sender.clone());
        let service = Arc::new(NotificationService::with_sender(mail).unwrap());

        let claim = claim();
        let hr = claim.assigned_hr.clone();

        // Assignment goes to HR, the decision goes back to the employee
        let assigned = service.spawn(Notification::ClaimAssigned {
            to: "arjun@example.com".to_string(),
            hr,
            claim: claim.clone(),
        });
        assigned.await.unwrap();
        service
            .send_claim_status_email("meera@example.com", &claim)
            .await;

        let sent = sender.sent().await;
        assert_eq!(sent.len(), 2);

        assert_eq!(sent[0].to, "arjun@example.com");
        assert!(sent[0].html_body.contains("Dear Arjun,"));

        assert_eq!(sent[1].subject, "InsurAi: Claim #7 Approved");
        assert!(sent[1].html_body.contains("20 Jan 2025 09:05 AM"));
        assert!(sent[1].html_body.contains("₹120000.00"));
        assert!(sent[1].html_body.contains("Settled in full"));
    }

    #[tokio::test]
    async fn test_query_round_trip_with_failing_transport() {
        let sender = RecordingMailSender::failing();
        let mail: Arc<dyn MailSender> = Arc::new(sender.clone());
        let service = NotificationService::with_sender(mail).unwrap();

        let query = EmployeeQuery {
            id: 9,
            query_text: "Can I add my parents?".to_string(),
            response: None,
            policy_name: Some("Group Health".to_string()),
            claim_type: None,
            employee: None,
        };

        service
            .send_employee_query_to_agent("agent@example.com", &query)
            .await;
        assert_eq!(sender.count().await, 0);

        sender.set_failing(false);
        let answered = EmployeeQuery {
            response: Some("Yes, during open enrolment.".to_string()),
            ..query
        };
        service
            .send_agent_response_to_employee("employee@example.com", &answered)
            .await;

        let sent = sender.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "InsurAi: Response to Your Query #9");
        assert!(sent[0].text_body.contains("Yes, during open enrolment."));
    }
}
