//! Core domain logic for the employee roster.
//! This crate is the single source of truth for record integrity rules.

pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;
pub mod view;

pub use form::EmployeeForm;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Attendance, EmployeeFields, EmployeeId, EmployeeRecord};
pub use repo::employee_repo::{EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository};
pub use service::roster_service::{RosterError, RosterResult, RosterService};
pub use validation::{
    parse_attendance, validate_phone, validate_required, ValidationError, ValidationResult,
};
pub use view::{RosterView, COLUMNS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
