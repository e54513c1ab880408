pub mod employee;

pub use employee::{EmployeeRepository, InMemoryEmployeeRepository};
