//! Record store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the employee data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Write paths enforce `EmployeeRecord::validate()` before persistence.
//! - Semantic errors (`DuplicateId`, `NotFound`) are reported alongside DB
//!   transport errors and never retried.

pub mod employee_repo;
