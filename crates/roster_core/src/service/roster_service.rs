//! Roster use-case service.
//!
//! # Responsibility
//! - Turn form submissions into validated record store writes.
//! - Read written records back so the shell shows stored state.
//! - Emit metadata-only logging for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Logs carry employee ids and outcomes only, never names or phones.

use crate::form::EmployeeForm;
use crate::model::employee::EmployeeRecord;
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use crate::validation::ValidationError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error surfaced to the shell.
#[derive(Debug)]
pub enum RosterError {
    /// Form input was rejected; nothing was written.
    Validation(ValidationError),
    /// Add with an existing employee id.
    DuplicateId(String),
    /// Update/delete with an unknown employee id.
    NotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl RosterError {
    /// Short machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::MissingFields(_)) => "missing_field",
            Self::Validation(ValidationError::InvalidPhone(_)) => "invalid_phone",
            Self::Validation(ValidationError::InvalidAttendance(_)) => "invalid_attendance",
            Self::DuplicateId(_) => "duplicate_id",
            Self::NotFound(_) => "not_found",
            Self::Repo(_) => "repo_error",
            Self::InconsistentState(_) => "inconsistent_state",
        }
    }
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "Employee ID '{id}' already exists."),
            Self::NotFound(id) => write!(f, "Employee ID '{id}' not found."),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent roster state: {details}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RosterError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for RosterError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::DuplicateId(id) => Self::DuplicateId(id),
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;

/// Roster facade over a record store implementation.
pub struct RosterService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates the form and creates a new employee.
    ///
    /// Returns the stored record on success.
    pub fn add_employee(&self, form: &EmployeeForm) -> RosterResult<EmployeeRecord> {
        let started_at = Instant::now();
        let outcome = form
            .to_record()
            .map_err(RosterError::from)
            .and_then(|record| {
                self.repo.create(&record)?;
                self.read_back(&record.id, "created employee not found in read-back")
            });
        log_mutation("employee_create", form.id.trim(), started_at, &outcome);
        outcome
    }

    /// Validates the form and overwrites every field of the employee whose id
    /// matches the form's id.
    pub fn update_employee(&self, form: &EmployeeForm) -> RosterResult<EmployeeRecord> {
        let started_at = Instant::now();
        let outcome = form
            .to_record()
            .map_err(RosterError::from)
            .and_then(|record| {
                self.repo.update(&record.id, &record.fields())?;
                self.read_back(&record.id, "updated employee not found in read-back")
            });
        log_mutation("employee_update", form.id.trim(), started_at, &outcome);
        outcome
    }

    /// Permanently deletes one employee by id.
    pub fn delete_employee(&self, id: &str) -> RosterResult<()> {
        let started_at = Instant::now();
        let id = id.trim();
        let outcome = self.repo.delete(id).map_err(RosterError::from);
        log_mutation("employee_delete", id, started_at, &outcome);
        outcome
    }

    /// Gets one employee by id.
    pub fn get_employee(&self, id: &str) -> RosterResult<Option<EmployeeRecord>> {
        Ok(self.repo.get(id.trim())?)
    }

    /// Lists all employees in insertion order.
    pub fn list_employees(&self) -> RosterResult<Vec<EmployeeRecord>> {
        Ok(self.repo.list_all()?)
    }

    /// Searches id and name; a blank query lists everything.
    pub fn search_employees(&self, query: &str) -> RosterResult<Vec<EmployeeRecord>> {
        Ok(self.repo.search(query.trim())?)
    }

    /// Number of stored employees.
    pub fn employee_count(&self) -> RosterResult<u64> {
        Ok(self.repo.count()?)
    }

    fn read_back(&self, id: &str, details: &'static str) -> RosterResult<EmployeeRecord> {
        self.repo
            .get(id)?
            .ok_or(RosterError::InconsistentState(details))
    }
}

fn log_mutation<T>(event: &str, id: &str, started_at: Instant, outcome: &RosterResult<T>) {
    let duration_ms = started_at.elapsed().as_millis();
    match outcome {
        Ok(_) => info!(
            "event={event} module=service status=ok employee_id={id} duration_ms={duration_ms}"
        ),
        Err(err) => warn!(
            "event={event} module=service status=error employee_id={id} duration_ms={duration_ms} error_code={}",
            err.code()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{RosterError, RosterService};
    use crate::db::open_db_in_memory;
    use crate::form::EmployeeForm;
    use crate::repo::employee_repo::{RepoError, SqliteEmployeeRepository};
    use crate::validation::ValidationError;

    fn form(id: &str, name: &str) -> EmployeeForm {
        EmployeeForm {
            id: id.to_string(),
            name: name.to_string(),
            department: "Eng".to_string(),
            phone: "12345678901".to_string(),
            attendance: "Present".to_string(),
        }
    }

    #[test]
    fn repo_errors_map_to_semantic_variants() {
        let conn = open_db_in_memory().unwrap();
        let service = RosterService::new(SqliteEmployeeRepository::new(&conn));

        service.add_employee(&form("E1", "Ada")).unwrap();
        let duplicate = service.add_employee(&form("E1", "Grace")).unwrap_err();
        assert!(matches!(&duplicate, RosterError::DuplicateId(id) if id == "E1"));
        assert_eq!(duplicate.code(), "duplicate_id");
        assert_eq!(duplicate.to_string(), "Employee ID 'E1' already exists.");

        let missing = service.delete_employee("nobody").unwrap_err();
        assert!(matches!(missing, RosterError::NotFound(_)));
    }

    #[test]
    fn read_failures_surface_as_roster_errors() {
        let conn = open_db_in_memory().unwrap();
        conn.execute(
            "INSERT INTO employees VALUES ('E1', 'Ada', 'Eng', '12345678901', 'Late');",
            [],
        )
        .unwrap();
        let service = RosterService::new(SqliteEmployeeRepository::new(&conn));

        assert!(matches!(
            service.list_employees(),
            Err(RosterError::Repo(RepoError::InvalidData(_)))
        ));
        assert!(matches!(
            service.get_employee("E1"),
            Err(RosterError::Repo(_))
        ));
        assert_eq!(service.employee_count().unwrap(), 1);
    }

    #[test]
    fn invalid_form_never_reaches_store() {
        let conn = open_db_in_memory().unwrap();
        let service = RosterService::new(SqliteEmployeeRepository::new(&conn));

        let mut bad = form("E1", "Ada");
        bad.phone = "12345".to_string();
        let err = service.add_employee(&bad).unwrap_err();
        assert!(matches!(
            err,
            RosterError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(err.to_string(), "Phone number must be 11 digits.");
        assert_eq!(service.employee_count().unwrap(), 0);
    }
}
