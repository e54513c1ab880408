//! # InsurAi Core
//!
//! Core business logic and domain layer for the InsurAi backend.
//! This crate contains domain entities, the employee token verifier, the
//! claim/query notification dispatcher, repository interfaces and error
//! types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Claim, Claims, Employee, EmployeeQuery, Hr, LegacyEmployeeToken, Policy};
pub use errors::{AuthError, DomainError, DomainResult, NotificationError, TokenError};
pub use repositories::{EmployeeRepository, InMemoryEmployeeRepository};
pub use services::{
    BcryptPasswordHasher, EmailMessage, EmployeeService, MailSender, Notification,
    NotificationKind, NotificationService, PasswordHasher, RecordingMailSender, TemplateRenderer,
    TokenService,
};
