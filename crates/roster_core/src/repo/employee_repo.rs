//! Employee record store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/update/delete/list/search over the `employees` table.
//! - Map SQLite constraint failures to semantic errors.
//!
//! # Invariants
//! - At most one row per `id`; duplicate creates fail without overwriting.
//! - Each operation is one SQL statement, so a failure leaves the table as it
//!   was.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::employee::{Attendance, EmployeeFields, EmployeeId, EmployeeRecord};
use crate::validation::ValidationError;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    department,
    phone,
    attendance
FROM employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Record store error.
#[derive(Debug)]
pub enum RepoError {
    /// Record failed business rules before reaching SQL.
    Validation(ValidationError),
    /// Create with an id that is already stored.
    DuplicateId(EmployeeId),
    /// Update/delete with an id that is not stored.
    NotFound(EmployeeId),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "Employee ID '{id}' already exists."),
            Self::NotFound(id) => write!(f, "Employee ID '{id}' not found."),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record store interface.
pub trait EmployeeRepository {
    fn create(&self, record: &EmployeeRecord) -> RepoResult<()>;
    fn update(&self, id: &str, fields: &EmployeeFields) -> RepoResult<()>;
    fn delete(&self, id: &str) -> RepoResult<()>;
    fn get(&self, id: &str) -> RepoResult<Option<EmployeeRecord>>;
    /// All records in insertion order.
    fn list_all(&self) -> RepoResult<Vec<EmployeeRecord>>;
    /// Records whose id or name contains `query` (case-sensitive).
    fn search(&self, query: &str) -> RepoResult<Vec<EmployeeRecord>>;
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed record store borrowing the process connection.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create(&self, record: &EmployeeRecord) -> RepoResult<()> {
        record.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO employees (id, name, department, phone, attendance)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                record.id.as_str(),
                record.name.as_str(),
                record.department.as_str(),
                record.phone.as_str(),
                record.attendance.as_str(),
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            Err(err) if is_primary_key_violation(&err) => {
                Err(RepoError::DuplicateId(record.id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn update(&self, id: &str, fields: &EmployeeFields) -> RepoResult<()> {
        EmployeeRecord::new(id, fields.clone()).validate()?;

        let changed = self.conn.execute(
            "UPDATE employees
             SET
                name = ?1,
                department = ?2,
                phone = ?3,
                attendance = ?4
             WHERE id = ?5;",
            params![
                fields.name.as_str(),
                fields.department.as_str(),
                fields.phone.as_str(),
                fields.attendance.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn get(&self, id: &str) -> RepoResult<Option<EmployeeRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        // Decode outside the rusqlite closure so InvalidData keeps its variant.
        let raw = stmt.query_row([id], RawRow::read).optional()?;
        raw.map(RawRow::into_record).transpose()
    }

    fn list_all(&self) -> RepoResult<Vec<EmployeeRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        collect_records(&mut rows)
    }

    fn search(&self, query: &str) -> RepoResult<Vec<EmployeeRecord>> {
        if query.is_empty() {
            return self.list_all();
        }

        // instr() is case-sensitive and treats `%`/`_` literally, unlike LIKE.
        let mut stmt = self.conn.prepare(&format!(
            "{EMPLOYEE_SELECT_SQL}
             WHERE instr(id, ?1) > 0 OR instr(name, ?1) > 0
             ORDER BY rowid ASC;"
        ))?;
        let mut rows = stmt.query([query])?;
        collect_records(&mut rows)
    }

    fn count(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM employees;", [], |row| {
                row.get::<_, i64>(0)
            })?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
    }
}

/// Column values as stored, before domain decoding.
struct RawRow {
    id: String,
    name: Option<String>,
    department: Option<String>,
    phone: Option<String>,
    attendance: Option<String>,
}

impl RawRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            department: row.get("department")?,
            phone: row.get("phone")?,
            attendance: row.get("attendance")?,
        })
    }

    fn into_record(self) -> RepoResult<EmployeeRecord> {
        let attendance_text = require_column(&self.id, "attendance", self.attendance)?;
        let attendance = Attendance::parse(&attendance_text).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid attendance `{attendance_text}` in employees.attendance for id `{}`",
                self.id
            ))
        })?;

        Ok(EmployeeRecord {
            name: require_column(&self.id, "name", self.name)?,
            department: require_column(&self.id, "department", self.department)?,
            phone: require_column(&self.id, "phone", self.phone)?,
            attendance,
            id: self.id,
        })
    }
}

fn collect_records(rows: &mut rusqlite::Rows<'_>) -> RepoResult<Vec<EmployeeRecord>> {
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        records.push(RawRow::read(row)?.into_record()?);
    }
    Ok(records)
}

fn require_column(id: &str, column: &str, value: Option<String>) -> RepoResult<String> {
    value.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL employees.{column} for id `{id}`"))
    })
}

fn is_primary_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}
