//! Shell-facing use-case API over the roster core.
//!
//! # Responsibility
//! - Drive `RosterService` and keep `RosterView` in sync after each action.
//! - Turn core results into response envelopes with operator messages.
//!
//! # Invariants
//! - Functions never panic; failures become `ok = false` responses.
//! - Every successful mutation reloads the full roster view.

use roster_core::{
    EmployeeForm, EmployeeRecord, RosterService, RosterView, SqliteEmployeeRepository,
};
use rusqlite::Connection;

/// Outcome of one form action (add/update/delete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Employee id the action targeted, when known.
    pub employee_id: Option<String>,
    /// Human-readable message for the operator.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, employee_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            employee_id: Some(employee_id.into()),
            message: message.into(),
        }
    }

    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            employee_id: None,
            message: message.into(),
        }
    }

    /// Operator declined the action; nothing changed.
    pub(crate) fn cancelled(employee_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            employee_id: Some(employee_id.into()),
            message: "Delete cancelled.".to_string(),
        }
    }
}

/// Result of a read action: the rows the table should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResponse {
    pub ok: bool,
    pub rows: Vec<EmployeeRecord>,
    pub message: String,
}

/// One shell session bound to an open roster database.
pub struct Shell<'conn> {
    service: RosterService<SqliteEmployeeRepository<'conn>>,
    view: RosterView,
}

impl<'conn> Shell<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            service: RosterService::new(SqliteEmployeeRepository::new(conn)),
            view: RosterView::new(),
        }
    }

    pub fn add(&mut self, form: &EmployeeForm) -> ActionResponse {
        match self.service.add_employee(form) {
            Ok(record) => self.after_mutation("Employee added successfully.", record.id),
            Err(err) => ActionResponse::failure(err.to_string()),
        }
    }

    pub fn update(&mut self, form: &EmployeeForm) -> ActionResponse {
        match self.service.update_employee(form) {
            Ok(record) => self.after_mutation("Employee updated successfully.", record.id),
            Err(err) => ActionResponse::failure(err.to_string()),
        }
    }

    pub fn delete(&mut self, id: &str) -> ActionResponse {
        let id = id.trim();
        match self.service.delete_employee(id) {
            Ok(()) => {
                let message = format!("Employee ID '{id}' has been deleted.");
                self.after_mutation(message, id)
            }
            Err(err) => ActionResponse::failure(err.to_string()),
        }
    }

    pub fn list(&mut self) -> TableResponse {
        let loaded = self.view.reload(&self.service);
        self.table_response(loaded.map_err(|err| err.to_string()))
    }

    pub fn search(&mut self, query: &str) -> TableResponse {
        let loaded = self.view.search(&self.service, query);
        self.table_response(loaded.map_err(|err| err.to_string()))
    }

    /// Looks up one employee and returns it as a filled form.
    pub fn show(&self, id: &str) -> Result<EmployeeForm, String> {
        match self.service.get_employee(id) {
            Ok(Some(record)) => Ok(EmployeeForm::from_record(&record)),
            Ok(None) => Err(format!("Employee ID '{}' not found.", id.trim())),
            Err(err) => Err(err.to_string()),
        }
    }

    fn after_mutation(
        &mut self,
        message: impl Into<String>,
        employee_id: impl Into<String>,
    ) -> ActionResponse {
        let message = message.into();
        // The write already succeeded; a failed refresh only stales the table.
        match self.view.reload(&self.service) {
            Ok(()) => ActionResponse::success(message, employee_id),
            Err(err) => {
                ActionResponse::success(format!("{message} (table refresh failed: {err})"), employee_id)
            }
        }
    }

    fn table_response(&self, loaded: Result<(), String>) -> TableResponse {
        match loaded {
            Ok(()) => {
                let rows = self.view.rows().to_vec();
                let message = match (rows.len(), self.view.query()) {
                    (0, Some(query)) => format!("No employees match '{query}'."),
                    (0, None) => "No employees.".to_string(),
                    (count, _) => format!("{count} employee(s)."),
                };
                TableResponse {
                    ok: true,
                    rows,
                    message,
                }
            }
            Err(message) => TableResponse {
                ok: false,
                rows: Vec::new(),
                message,
            },
        }
    }
}
