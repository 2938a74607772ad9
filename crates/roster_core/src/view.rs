//! Table view state and its synchronization rules.
//!
//! # Responsibility
//! - Hold the rows the shell renders, the active search and the selection.
//! - Re-render from the record store after every mutation.
//!
//! # Invariants
//! - Rows always come from a store read; the view never edits them locally.
//! - A reload shows the full roster and drops the query and selection.

use crate::form::EmployeeForm;
use crate::model::employee::EmployeeRecord;
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::roster_service::{RosterResult, RosterService};

/// Column headings, in persisted column order.
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Department", "Phone", "Attendance"];

#[derive(Debug, Clone, Default)]
pub struct RosterView {
    rows: Vec<EmployeeRecord>,
    query: Option<String>,
    selected: Option<usize>,
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows every record; used at startup and after each mutation.
    pub fn reload<R: EmployeeRepository>(
        &mut self,
        service: &RosterService<R>,
    ) -> RosterResult<()> {
        self.rows = service.list_employees()?;
        self.query = None;
        self.selected = None;
        Ok(())
    }

    /// Shows records whose id or name contains `query`.
    ///
    /// A blank query behaves like [`RosterView::reload`].
    pub fn search<R: EmployeeRepository>(
        &mut self,
        service: &RosterService<R>,
        query: &str,
    ) -> RosterResult<()> {
        let query = query.trim();
        if query.is_empty() {
            return self.reload(service);
        }

        self.rows = service.search_employees(query)?;
        self.query = Some(query.to_string());
        self.selected = None;
        Ok(())
    }

    pub fn clear_search<R: EmployeeRepository>(
        &mut self,
        service: &RosterService<R>,
    ) -> RosterResult<()> {
        self.reload(service)
    }

    /// Selects a row and returns a form filled from it.
    ///
    /// Out-of-range indexes clear the selection and return `None`.
    pub fn select(&mut self, index: usize) -> Option<EmployeeForm> {
        match self.rows.get(index) {
            Some(record) => {
                self.selected = Some(index);
                Some(EmployeeForm::from_record(record))
            }
            None => {
                self.selected = None;
                None
            }
        }
    }

    pub fn rows(&self) -> &[EmployeeRecord] {
        &self.rows
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn selected(&self) -> Option<&EmployeeRecord> {
        self.selected.and_then(|index| self.rows.get(index))
    }

    /// Row cells as display text, in [`COLUMNS`] order.
    pub fn cells(record: &EmployeeRecord) -> [&str; 5] {
        [
            record.id.as_str(),
            record.name.as_str(),
            record.department.as_str(),
            record.phone.as_str(),
            record.attendance.as_str(),
        ]
    }
}
