//! Business services containing domain logic and use cases.

pub mod employee;
pub mod notification;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use employee::{EmployeeService, BEARER_PREFIX};
pub use notification::{
    EmailMessage, MailSender, Notification, NotificationKind, NotificationService,
    RecordingMailSender, TemplateRenderer,
};
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use token::TokenService;
