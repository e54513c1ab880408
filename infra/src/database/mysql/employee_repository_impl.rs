//! MySQL implementation of the EmployeeRepository trait.
//!
//! Rows live in the `employees` table created by the embedded migrations.
//! Email comparison follows the column collation, which is
//! case-insensitive.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ia_core::errors::DomainError;
use ia_core::repositories::EmployeeRepository;
use ia_core::Employee;

const SELECT_COLUMNS: &str = "SELECT id, employee_id, name, email, password, role, created_at FROM employees";

/// MySQL implementation of EmployeeRepository
pub struct MySqlEmployeeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    /// Create a new MySQL employee repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Employee entity
    fn row_to_employee(row: &sqlx::mysql::MySqlRow) -> Result<Employee, DomainError> {
        Ok(Employee {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            employee_id: row
                .try_get("employee_id")
                .map_err(|e| DomainError::Database(format!("Failed to get employee_id: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {}", e)))?,
            password: row
                .try_get("password")
                .map_err(|e| DomainError::Database(format!("Failed to get password: {}", e)))?,
            role: row
                .try_get("role")
                .map_err(|e| DomainError::Database(format!("Failed to get role: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }

    async fn find_one(&self, column: &'static str, value: &str) -> Result<Option<Employee>, DomainError> {
        let query = format!("{} WHERE {} = ? LIMIT 1", SELECT_COLUMNS, column);

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, mut employee: Employee) -> Result<Employee, DomainError> {
        let query = r#"
            INSERT INTO employees (employee_id, name, email, password, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&employee.employee_id)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.password)
            .bind(&employee.role)
            .bind(employee.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create employee: {}", e)))?;

        employee.id = i64::try_from(result.last_insert_id()).map_err(|_| DomainError::Internal {
            message: "Inserted employee id out of range".to_string(),
        })?;
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, DomainError> {
        let query = r#"
            UPDATE employees SET
                employee_id = ?,
                name = ?,
                email = ?,
                password = ?,
                role = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&employee.employee_id)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(&employee.password)
            .bind(&employee.role)
            .bind(employee.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update employee: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("Employee {}", employee.id),
            });
        }
        Ok(employee)
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Employee>, DomainError> {
        self.find_one("employee_id", employee_id).await
    }

    async fn save(&self, employee: Employee) -> Result<Employee, DomainError> {
        if employee.id == 0 {
            self.insert(employee).await
        } else {
            self.update(employee).await
        }
    }
}
