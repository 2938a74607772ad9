//! Domain model for the employee roster.
//!
//! # Responsibility
//! - Define the named-field record shape shared by store, service and view.
//!
//! # Invariants
//! - Every record is identified by a caller-chosen `EmployeeId`.
//! - Deletion is permanent; there is no tombstone state.

pub mod employee;
