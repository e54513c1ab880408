//! Domain entities representing core business objects.

pub mod claim;
pub mod employee;
pub mod employee_query;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use claim::{Claim, Hr, Policy};
pub use employee::{Employee, DEFAULT_EMPLOYEE_ROLE};
pub use employee_query::EmployeeQuery;
pub use token::{Claims, LegacyEmployeeToken};
