//! Unit tests for the in-memory employee repository

use crate::domain::entities::employee::Employee;
use crate::errors::DomainError;
use crate::repositories::{EmployeeRepository, InMemoryEmployeeRepository};

fn alice() -> Employee {
    Employee::new("EMP-001", "Alice", "alice@example.com", "hash")
}

#[tokio::test]
async fn test_save_assigns_ids() {
    let repo = InMemoryEmployeeRepository::new();

    let first = repo.save(alice()).await.unwrap();
    let second = repo
        .save(Employee::new("EMP-002", "Bob", "bob@example.com", "hash"))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_find_by_email_is_case_insensitive() {
    let repo = InMemoryEmployeeRepository::with_employees(vec![alice()])
        .await
        .unwrap();

    let found = repo.find_by_email("ALICE@example.com").await.unwrap();
    assert_eq!(found.map(|e| e.employee_id), Some("EMP-001".to_string()));

    assert!(repo.find_by_email("mallory@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_employee_id() {
    let repo = InMemoryEmployeeRepository::with_employees(vec![alice()])
        .await
        .unwrap();

    let found = repo.find_by_employee_id("EMP-001").await.unwrap().unwrap();
    assert_eq!(found.email, "alice@example.com");
    assert!(repo.find_by_employee_id("EMP-404").await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_updates_existing_record() {
    let repo = InMemoryEmployeeRepository::new();
    let mut saved = repo.save(alice()).await.unwrap();

    saved.name = "Alice Cooper".to_string();
    repo.save(saved.clone()).await.unwrap();

    let found = repo.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_eq!(found.name, "Alice Cooper");
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_save_unknown_id_fails() {
    let repo = InMemoryEmployeeRepository::new();
    let mut ghost = alice();
    ghost.id = 99;

    let result = repo.save(ghost).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
    assert!(repo.is_empty().await);
}
