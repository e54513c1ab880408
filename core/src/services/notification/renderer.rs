//! Email template rendering
//!
//! Templates are embedded at compile time with `include_str!` and rendered
//! with tera. HTML templates share `layout.html` and are autoescaped, so
//! user-supplied text (claim titles, remarks, query text) cannot inject
//! markup. The plain-text alternatives are rendered unescaped.

use tera::{Context, Tera};

use crate::domain::entities::claim::{Claim, Hr};
use crate::domain::entities::employee_query::EmployeeQuery;
use crate::errors::NotificationError;

use super::message::{EmailMessage, Notification, NotificationKind};

/// Claim date format, e.g. `05 Mar 2025 02:30 PM`
pub const CLAIM_DATE_FORMAT: &str = "%d %b %Y %I:%M %p";

const APPROVED_COLOR: &str = "#28a745";
const NOT_APPROVED_COLOR: &str = "#dc3545";

/// Renders notification events into email messages
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// Registers the embedded templates
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "layout.html",
                    include_str!("../../../templates/notifications/layout.html"),
                ),
                (
                    "claim_status.html",
                    include_str!("../../../templates/notifications/claim_status.html"),
                ),
                (
                    "claim_status.txt",
                    include_str!("../../../templates/notifications/claim_status.txt"),
                ),
                (
                    "claim_assigned.html",
                    include_str!("../../../templates/notifications/claim_assigned.html"),
                ),
                (
                    "claim_assigned.txt",
                    include_str!("../../../templates/notifications/claim_assigned.txt"),
                ),
                (
                    "query_submitted.html",
                    include_str!("../../../templates/notifications/query_submitted.html"),
                ),
                (
                    "query_submitted.txt",
                    include_str!("../../../templates/notifications/query_submitted.txt"),
                ),
                (
                    "query_answered.html",
                    include_str!("../../../templates/notifications/query_answered.html"),
                ),
                (
                    "query_answered.txt",
                    include_str!("../../../templates/notifications/query_answered.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// Renders an owned notification event
    pub fn render(&self, notification: &Notification) -> Result<EmailMessage, NotificationError> {
        match notification {
            Notification::ClaimStatus { to, claim } => self.claim_status(to, claim),
            Notification::ClaimAssigned { to, hr, claim } => {
                self.claim_assigned(to, hr.as_ref(), claim)
            }
            Notification::QuerySubmitted { to, query } => self.query_submitted(to, query),
            Notification::QueryAnswered { to, query } => self.query_answered(to, query),
        }
    }

    /// Claim decision for the employee
    pub fn claim_status(&self, to: &str, claim: &Claim) -> Result<EmailMessage, NotificationError> {
        let mut context = claim_context(claim);
        let status_color = if claim.is_approved() {
            APPROVED_COLOR
        } else {
            NOT_APPROVED_COLOR
        };
        context.insert("status", &claim.status);
        context.insert("status_color", status_color);
        context.insert(
            "employee_name",
            claim
                .employee
                .as_ref()
                .map(|e| e.name.as_str())
                .unwrap_or("Employee"),
        );
        context.insert(
            "policy_name",
            claim
                .policy
                .as_ref()
                .map(|p| p.policy_name.as_str())
                .unwrap_or(""),
        );
        context.insert(
            "hr_name",
            claim
                .assigned_hr
                .as_ref()
                .map(|hr| hr.name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or("Not yet assigned"),
        );
        context.insert("remarks", claim.remarks().unwrap_or(""));

        let subject = format!("InsurAi: Claim #{} {}", claim.id, claim.status);
        self.render_message(NotificationKind::ClaimStatus, to, subject, &context)
    }

    /// New claim for the reviewing HR
    pub fn claim_assigned(
        &self,
        to: &str,
        hr: Option<&Hr>,
        claim: &Claim,
    ) -> Result<EmailMessage, NotificationError> {
        let mut context = claim_context(claim);
        context.insert("hr_name", hr.map(|hr| hr.name.as_str()).unwrap_or("HR"));
        context.insert(
            "employee_name",
            claim
                .employee
                .as_ref()
                .map(|e| e.name.as_str())
                .unwrap_or(""),
        );

        let subject = format!("InsurAi: New Claim Assigned - #{}", claim.id);
        self.render_message(NotificationKind::ClaimAssigned, to, subject, &context)
    }

    /// Employee query for an agent
    pub fn query_submitted(
        &self,
        to: &str,
        query: &EmployeeQuery,
    ) -> Result<EmailMessage, NotificationError> {
        let mut context = query_context(query);
        context.insert(
            "employee_name",
            query
                .employee
                .as_ref()
                .map(|e| e.name.as_str())
                .unwrap_or("Employee"),
        );

        let employee_ref = query
            .employee
            .as_ref()
            .map(|e| e.id.to_string())
            .unwrap_or_default();
        let subject = format!("InsurAi: New Query from Employee #{}", employee_ref);
        self.render_message(NotificationKind::QuerySubmitted, to, subject, &context)
    }

    /// Agent response for the employee
    pub fn query_answered(
        &self,
        to: &str,
        query: &EmployeeQuery,
    ) -> Result<EmailMessage, NotificationError> {
        let mut context = query_context(query);
        context.insert("response", query.response.as_deref().unwrap_or(""));

        let subject = format!("InsurAi: Response to Your Query #{}", query.id);
        self.render_message(NotificationKind::QueryAnswered, to, subject, &context)
    }

    fn render_message(
        &self,
        kind: NotificationKind,
        to: &str,
        subject: String,
        context: &Context,
    ) -> Result<EmailMessage, NotificationError> {
        let html_body = self
            .engine
            .render(&format!("{}.html", kind.as_str()), context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{}.txt", kind.as_str()), context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            to: to.to_string(),
            subject,
            html_body,
            text_body,
        })
    }
}

/// Fields shared by both claim emails
fn claim_context(claim: &Claim) -> Context {
    let mut context = Context::new();
    context.insert("claim_id", &claim.id);
    context.insert("title", &claim.title);
    context.insert("amount", &format_amount(claim.amount));
    context.insert(
        "claim_date",
        &claim
            .claim_date
            .map(|d| d.format(CLAIM_DATE_FORMAT).to_string())
            .unwrap_or_default(),
    );
    context
}

/// Fields shared by both query emails
fn query_context(query: &EmployeeQuery) -> Context {
    let mut context = Context::new();
    context.insert("query_id", &query.id);
    context.insert("query_text", &query.query_text);
    context.insert("policy_name", query.policy_name.as_deref().unwrap_or(""));
    context.insert("claim_type", query.claim_type.as_deref().unwrap_or(""));
    context
}

fn format_amount(amount: f64) -> String {
    format!("₹{:.2}", amount)
}
