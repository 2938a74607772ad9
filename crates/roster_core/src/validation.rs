//! Input validation for employee data.
//!
//! # Responsibility
//! - Gate every value that enters the record store.
//! - Keep rules pure so shell, scripts and tests share one boundary.
//!
//! # Invariants
//! - Functions have no side effects.
//! - Phone numbers are exactly 11 ASCII digits with nothing around them.

use crate::model::employee::Attendance;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("valid phone regex"));

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejection reason for raw field input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Named fields that were empty or whitespace-only, in input order.
    MissingFields(Vec<&'static str>),
    /// Phone value that does not match the 11-digit pattern.
    InvalidPhone(String),
    /// Attendance text outside `Present|Absent`.
    InvalidAttendance(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                write!(f, "All fields are required. Missing: {}", fields.join(", "))
            }
            Self::InvalidPhone(_) => f.write_str("Phone number must be 11 digits."),
            Self::InvalidAttendance(value) => {
                write!(f, "Attendance must be Present or Absent, got `{value}`.")
            }
        }
    }
}

impl Error for ValidationError {}

/// Fails with [`ValidationError::MissingFields`] naming every blank entry.
///
/// A value counts as blank when it is empty after trimming whitespace.
pub fn validate_required(fields: &[(&'static str, &str)]) -> ValidationResult<()> {
    let missing = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Accepts exactly 11 ASCII decimal digits.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Parses drop-down attendance text into [`Attendance`].
pub fn parse_attendance(value: &str) -> ValidationResult<Attendance> {
    Attendance::parse(value).ok_or_else(|| ValidationError::InvalidAttendance(value.to_string()))
}
