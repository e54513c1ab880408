//! Employee entity representing an authenticated principal of the claims system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role assigned to self-registered employees
pub const DEFAULT_EMPLOYEE_ROLE: &str = "EMPLOYEE";

/// Employee identity record
///
/// Owned by the persistence layer. The password field always holds a
/// one-way hash and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Database identifier, `0` until persisted
    pub id: i64,

    /// Company-issued employee number
    pub employee_id: String,

    /// Display name
    pub name: String,

    /// Login email, also the JWT subject
    pub email: String,

    /// Password hash
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Authorization role
    pub role: String,

    /// Timestamp when the employee was registered
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Creates a new, not yet persisted employee
    pub fn new(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            employee_id: employee_id.into(),
            name: name.into(),
            email: email.into(),
            password: password_hash.into(),
            role: DEFAULT_EMPLOYEE_ROLE.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Checks whether the record has been assigned a database id
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}
