//! Claim entity and the records it references.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::employee::Employee;

/// HR staff member who reviews claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hr {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Insurance policy a claim is filed against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: i64,
    pub policy_name: String,
}

/// Insurance claim filed by an employee
///
/// `status` is free text ("Pending", "Approved", "Rejected", ...). Only
/// "Approved" (case-insensitive) is treated specially, for styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub amount: f64,
    pub claim_date: Option<NaiveDateTime>,
    pub remarks: Option<String>,
    pub employee: Option<Employee>,
    pub policy: Option<Policy>,
    pub assigned_hr: Option<Hr>,
}

impl Claim {
    /// Checks whether the claim status reads "Approved"
    pub fn is_approved(&self) -> bool {
        self.status.eq_ignore_ascii_case("approved")
    }

    /// Remarks, if present and non-empty
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref().filter(|r| !r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(status: &str, remarks: Option<&str>) -> Claim {
        Claim {
            id: 1,
            title: "Hospitalization".to_string(),
            status: status.to_string(),
            amount: 1200.0,
            claim_date: None,
            remarks: remarks.map(str::to_string),
            employee: None,
            policy: None,
            assigned_hr: None,
        }
    }

    #[test]
    fn test_is_approved_ignores_case() {
        assert!(claim("Approved", None).is_approved());
        assert!(claim("APPROVED", None).is_approved());
        assert!(!claim("Rejected", None).is_approved());
        assert!(!claim("Pending approval", None).is_approved());
    }

    #[test]
    fn test_empty_remarks_are_absent() {
        assert_eq!(claim("Pending", None).remarks(), None);
        assert_eq!(claim("Pending", Some("")).remarks(), None);
        assert_eq!(claim("Pending", Some("Missing bill")).remarks(), Some("Missing bill"));
    }
}
