//! Employee verification and registration
//!
//! Answers "does this request come from a registered employee?" for the
//! HTTP layer. Every failure path is closed: the boolean and option APIs
//! never surface an error, and the typed APIs say why.

mod service;


pub use service::{EmployeeService, BEARER_PREFIX};
