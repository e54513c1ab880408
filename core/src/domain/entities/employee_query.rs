//! Query raised by an employee and answered by an agent.

use serde::{Deserialize, Serialize};

use super::employee::Employee;

/// Employee query exchanged with an insurance agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeQuery {
    pub id: i64,
    pub query_text: String,
    /// Agent answer, absent until responded
    pub response: Option<String>,
    pub policy_name: Option<String>,
    pub claim_type: Option<String>,
    pub employee: Option<Employee>,
}

impl EmployeeQuery {
    /// Checks whether an agent has answered the query
    pub fn is_answered(&self) -> bool {
        self.response.as_deref().is_some_and(|r| !r.trim().is_empty())
    }
}
