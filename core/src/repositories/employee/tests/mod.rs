//! Tests for employee repositories

mod memory_tests;
