//! Notification dispatcher
//!
//! Renders the transactional emails of the claims workflow and hands them
//! to a [`MailSender`]. Delivery is fire-and-forget: failures are logged
//! and never reach the business operation that triggered them.

mod message;
mod renderer;
mod sender;
mod service;

#[cfg(test)]
mod tests;

pub use message::{EmailMessage, Notification, NotificationKind};
pub use renderer::{TemplateRenderer, CLAIM_DATE_FORMAT};
pub use sender::{MailSender, RecordingMailSender};
pub use service::NotificationService;
