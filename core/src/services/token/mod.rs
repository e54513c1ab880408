//! Token service module for JWT management
//!
//! Signs and verifies HS256 access tokens whose subject is the employee
//! email. Revocation and refresh are not handled here.

mod service;


pub use service::TokenService;
