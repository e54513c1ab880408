//! Sample claims and queries for notification tests

use chrono::NaiveDate;

use crate::domain::entities::claim::{Claim, Hr, Policy};
use crate::domain::entities::employee::Employee;
use crate::domain::entities::employee_query::EmployeeQuery;

pub fn employee() -> Employee {
    let mut employee = Employee::new("EMP-042", "Priya Sharma", "priya@example.com", "hash");
    employee.id = 42;
    employee
}

pub fn hr() -> Hr {
    Hr {
        id: 7,
        name: "Rahul Verma".to_string(),
        email: "rahul.hr@example.com".to_string(),
    }
}

pub fn claim(status: &str) -> Claim {
    Claim {
        id: 1001,
        title: "Hospitalization".to_string(),
        status: status.to_string(),
        amount: 25000.5,
        claim_date: NaiveDate::from_ymd_opt(2025, 3, 5).and_then(|d| d.and_hms_opt(14, 30, 0)),
        remarks: None,
        employee: Some(employee()),
        policy: Some(Policy {
            id: 3,
            policy_name: "Family Health Plus".to_string(),
        }),
        assigned_hr: Some(hr()),
    }
}

/// Claim with every optional association missing
pub fn bare_claim() -> Claim {
    Claim {
        id: 1002,
        title: "Dental".to_string(),
        status: "Pending".to_string(),
        amount: 800.0,
        claim_date: None,
        remarks: None,
        employee: None,
        policy: None,
        assigned_hr: None,
    }
}

pub fn query() -> EmployeeQuery {
    EmployeeQuery {
        id: 55,
        query_text: "Is physiotherapy covered?".to_string(),
        response: Some("Yes, up to 10 sessions per year.".to_string()),
        policy_name: Some("Family Health Plus".to_string()),
        claim_type: Some("Outpatient".to_string()),
        employee: Some(employee()),
    }
}

pub fn bare_query() -> EmployeeQuery {
    EmployeeQuery {
        id: 56,
        query_text: "Any update?".to_string(),
        response: None,
        policy_name: None,
        claim_type: None,
        employee: None,
    }
}
