//! In-memory implementation of EmployeeRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::employee::Employee;
use crate::errors::DomainError;

use super::trait_::EmployeeRepository;

/// In-memory employee repository
///
/// Email lookups are case-insensitive, matching the collation of the
/// production `employees` table.
#[derive(Clone)]
pub struct InMemoryEmployeeRepository {
    employees: Arc<RwLock<HashMap<i64, Employee>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryEmployeeRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            employees: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Create a repository pre-populated with employees
    pub async fn with_employees(employees: Vec<Employee>) -> Result<Self, DomainError> {
        let repo = Self::new();
        for employee in employees {
            repo.save(employee).await?;
        }
        Ok(repo)
    }

    /// Number of stored employees
    pub async fn len(&self) -> usize {
        self.employees.read().await.len()
    }

    /// Whether the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.employees.read().await.is_empty()
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees
            .values()
            .find(|e| e.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees
            .values()
            .find(|e| e.employee_id == employee_id)
            .cloned())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, DomainError> {
        let mut employees = self.employees.write().await;

        if employee.id == 0 {
            employee.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        } else if !employees.contains_key(&employee.id) {
            return Err(DomainError::NotFound {
                resource: format!("Employee {}", employee.id),
            });
        }

        employees.insert(employee.id, employee.clone());
        Ok(employee)
    }
}
