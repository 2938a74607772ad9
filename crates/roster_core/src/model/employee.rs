//! Employee record model.
//!
//! # Responsibility
//! - Define `EmployeeRecord` and its attendance enumeration.
//! - Apply business rules to typed records via [`EmployeeRecord::validate`].
//!
//! # Invariants
//! - `id` never changes after creation; updates carry [`EmployeeFields`] only.
//! - A persisted record has all five fields populated and a valid phone.

use crate::validation::{validate_phone, validate_required, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Primary key of an employee record, chosen by the operator.
pub type EmployeeId = String;

/// Attendance status offered by the roster form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attendance {
    Present,
    Absent,
}

impl Attendance {
    /// Every selectable value, in drop-down order.
    pub const ALL: [Attendance; 2] = [Attendance::Present, Attendance::Absent];

    /// Text stored in `employees.attendance` and shown in the table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
        }
    }

    /// Parses the stored/displayed spelling. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Present" => Some(Self::Present),
            "Absent" => Some(Self::Absent),
            _ => None,
        }
    }
}

impl Display for Attendance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable part of a record: everything except the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub department: String,
    /// Exactly 11 ASCII digits.
    pub phone: String,
    pub attendance: Attendance,
}

/// One employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub phone: String,
    pub attendance: Attendance,
}

impl EmployeeRecord {
    /// Builds a record from its id and mutable fields.
    ///
    /// Does not validate; call [`EmployeeRecord::validate`] before persisting.
    pub fn new(id: impl Into<EmployeeId>, fields: EmployeeFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            department: fields.department,
            phone: fields.phone,
            attendance: fields.attendance,
        }
    }

    /// Returns a copy of the mutable fields, e.g. as an update payload.
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            department: self.department.clone(),
            phone: self.phone.clone(),
            attendance: self.attendance,
        }
    }

    /// Replaces every field except `id`.
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.name = fields.name;
        self.department = fields.department;
        self.phone = fields.phone;
        self.attendance = fields.attendance;
    }

    /// Checks required text fields and the phone pattern.
    ///
    /// `attendance` is already constrained by its type.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required(&[
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("department", self.department.as_str()),
            ("phone", self.phone.as_str()),
        ])?;
        validate_phone(&self.phone)
    }
}
