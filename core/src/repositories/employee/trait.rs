//! Employee repository trait defining the interface for employee persistence.
//!
//! The verifier and the registration flow only ever need three operations,
//! so the trait stays deliberately small. Implementations live in the
//! infrastructure layer (MySQL) and in [`super::InMemoryEmployeeRepository`].

use async_trait::async_trait;

use crate::domain::entities::employee::Employee;
use crate::errors::DomainError;

/// Repository trait for Employee persistence operations
///
/// # Example
/// ```ignore
/// use ia_core::repositories::EmployeeRepository;
///
/// async fn lookup(repo: &impl EmployeeRepository) -> Result<(), ia_core::DomainError> {
///     match repo.find_by_email("alice@example.com").await? {
///         Some(employee) => println!("Found {}", employee.employee_id),
///         None => println!("No such employee"),
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find an employee by login email
    ///
    /// # Returns
    /// * `Ok(Some(Employee))` - Employee found
    /// * `Ok(None)` - No employee registered with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;

    /// Find an employee by company-issued employee number
    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Employee>, DomainError>;

    /// Insert or update an employee
    ///
    /// A record with `id == 0` is inserted and returned with its new id;
    /// any other record replaces the stored row with the same id.
    async fn save(&self, employee: Employee) -> Result<Employee, DomainError>;
}
