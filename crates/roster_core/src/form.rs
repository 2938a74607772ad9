//! Raw form state edited by the presentation shell.
//!
//! # Responsibility
//! - Hold unvalidated field text exactly as typed.
//! - Convert to/from [`EmployeeRecord`] by field name, never by position.
//!
//! # Invariants
//! - `to_record` only yields records that pass every validation rule.
//! - Validation order: required fields, then phone, then attendance.

use crate::model::employee::{EmployeeFields, EmployeeRecord};
use crate::validation::{parse_attendance, validate_phone, validate_required, ValidationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub id: String,
    pub name: String,
    pub department: String,
    pub phone: String,
    pub attendance: String,
}

impl EmployeeForm {
    /// Fills the form from a selected table row.
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            department: record.department.clone(),
            phone: record.phone.clone(),
            attendance: record.attendance.as_str().to_string(),
        }
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Ordered `(label, value)` pairs checked by [`validate_required`].
    pub fn required_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("department", self.department.as_str()),
            ("phone", self.phone.as_str()),
            ("attendance", self.attendance.as_str()),
        ]
    }

    /// Trims the text inputs and validates them into a record.
    ///
    /// Attendance comes from a fixed drop-down and is matched untrimmed.
    pub fn to_record(&self) -> ValidationResult<EmployeeRecord> {
        validate_required(&self.required_fields())?;

        let phone = self.phone.trim();
        validate_phone(phone)?;
        let attendance = parse_attendance(&self.attendance)?;

        Ok(EmployeeRecord::new(
            self.id.trim(),
            EmployeeFields {
                name: self.name.trim().to_string(),
                department: self.department.trim().to_string(),
                phone: phone.to_string(),
                attendance,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::EmployeeForm;
    use crate::model::employee::Attendance;
    use crate::validation::ValidationError;

    fn filled() -> EmployeeForm {
        EmployeeForm {
            id: " E1 ".to_string(),
            name: "Ada\n".to_string(),
            department: "Eng".to_string(),
            phone: " 12345678901 ".to_string(),
            attendance: "Present".to_string(),
        }
    }

    #[test]
    fn to_record_trims_text_inputs() {
        let record = filled().to_record().unwrap();
        assert_eq!(record.id, "E1");
        assert_eq!(record.name, "Ada");
        assert_eq!(record.phone, "12345678901");
        assert_eq!(record.attendance, Attendance::Present);
    }

    #[test]
    fn empty_form_reports_every_field() {
        let err = EmployeeForm::default().to_record().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["id", "name", "department", "phone", "attendance"])
        );
    }

    #[test]
    fn missing_fields_win_over_bad_phone() {
        let mut form = filled();
        form.name.clear();
        form.phone = "12".to_string();
        assert_eq!(
            form.to_record().unwrap_err(),
            ValidationError::MissingFields(vec!["name"])
        );
    }

    #[test]
    fn unknown_attendance_is_rejected() {
        let mut form = filled();
        form.attendance = "On leave".to_string();
        assert!(matches!(
            form.to_record(),
            Err(ValidationError::InvalidAttendance(_))
        ));
    }

    #[test]
    fn from_record_then_clear() {
        let record = filled().to_record().unwrap();
        let mut form = EmployeeForm::from_record(&record);
        assert_eq!(form.id, "E1");
        assert_eq!(form.attendance, "Present");

        form.clear();
        assert_eq!(form, EmployeeForm::default());
    }
}
