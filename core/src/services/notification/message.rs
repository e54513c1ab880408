//! Notification events and rendered messages

use serde::{Deserialize, Serialize};

use crate::domain::entities::claim::{Claim, Hr};
use crate::domain::entities::employee_query::EmployeeQuery;

/// Rendered email, ready for a [`super::MailSender`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// The four business events that produce an email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Claim decision sent to the employee
    ClaimStatus,
    /// New claim sent to the reviewing HR
    ClaimAssigned,
    /// Employee query sent to an agent
    QuerySubmitted,
    /// Agent response sent back to the employee
    QueryAnswered,
}

impl NotificationKind {
    /// Stable label, also the template base name
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ClaimStatus => "claim_status",
            NotificationKind::ClaimAssigned => "claim_assigned",
            NotificationKind::QuerySubmitted => "query_submitted",
            NotificationKind::QueryAnswered => "query_answered",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owned notification event
///
/// Used when the send is moved onto a detached task and can no longer
/// borrow from the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    ClaimStatus {
        to: String,
        claim: Claim,
    },
    ClaimAssigned {
        to: String,
        hr: Option<Hr>,
        claim: Claim,
    },
    QuerySubmitted {
        to: String,
        query: EmployeeQuery,
    },
    QueryAnswered {
        to: String,
        query: EmployeeQuery,
    },
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::ClaimStatus { .. } => NotificationKind::ClaimStatus,
            Notification::ClaimAssigned { .. } => NotificationKind::ClaimAssigned,
            Notification::QuerySubmitted { .. } => NotificationKind::QuerySubmitted,
            Notification::QueryAnswered { .. } => NotificationKind::QueryAnswered,
        }
    }

    pub fn recipient(&self) -> &str {
        match self {
            Notification::ClaimStatus { to, .. }
            | Notification::ClaimAssigned { to, .. }
            | Notification::QuerySubmitted { to, .. }
            | Notification::QueryAnswered { to, .. } => to,
        }
    }

    /// Id of the claim or query the event is about
    pub fn reference_id(&self) -> i64 {
        match self {
            Notification::ClaimStatus { claim, .. } | Notification::ClaimAssigned { claim, .. } => {
                claim.id
            }
            Notification::QuerySubmitted { query, .. } | Notification::QueryAnswered { query, .. } => {
                query.id
            }
        }
    }
}
