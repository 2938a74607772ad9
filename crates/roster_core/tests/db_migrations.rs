use roster_core::db::migrations::latest_version;
use roster_core::db::{open_db, open_db_in_memory, DbError};
use roster_core::{Attendance, EmployeeRepository, SqliteEmployeeRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_eq!(
        column_names(&conn),
        vec!["id", "name", "department", "phone", "attendance"]
    );
}

#[test]
fn reopening_file_database_keeps_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO employees VALUES ('E1', 'Ada', 'Eng', '12345678901', 'Present');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let repo = SqliteEmployeeRepository::new(&conn);
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn unversioned_legacy_file_is_adopted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");

    let legacy = Connection::open(&path).unwrap();
    legacy
        .execute_batch(
            "CREATE TABLE employees (
                id TEXT PRIMARY KEY,
                name TEXT,
                department TEXT,
                phone TEXT,
                attendance TEXT
            );
            INSERT INTO employees VALUES ('7', 'Old Timer', 'HR', '09876543210', 'Absent');",
        )
        .unwrap();
    drop(legacy);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let repo = SqliteEmployeeRepository::new(&conn);
    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Old Timer");
}

#[test]
fn legacy_attendance_text_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");
    write_legacy_rows(
        &path,
        &[
            ("E1", "Present"),
            ("E2", "present"),
            ("E3", " ABSENT "),
            ("E4", "Absent"),
        ],
    );

    let conn = open_db(&path).unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    let attendance = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|r| (r.id, r.attendance))
        .collect::<Vec<_>>();
    assert_eq!(
        attendance,
        vec![
            ("E1".to_string(), Attendance::Present),
            ("E2".to_string(), Attendance::Present),
            ("E3".to_string(), Attendance::Absent),
            ("E4".to_string(), Attendance::Absent),
        ]
    );
}

#[test]
fn unmappable_legacy_attendance_is_rejected_without_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");
    write_legacy_rows(&path, &[("E1", "present"), ("E2", "Late"), ("E3", "")]);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedAttendance { ids } => assert_eq!(ids, vec!["E2", "E3"]),
        other => panic!("unexpected error: {other}"),
    }

    let raw = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&raw), 0);
    let untouched: String = raw
        .query_row("SELECT attendance FROM employees WHERE id = 'E1';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(untouched, "present");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn write_legacy_rows(path: &std::path::Path, rows: &[(&str, &str)]) {
    let legacy = Connection::open(path).unwrap();
    legacy
        .execute_batch(
            "CREATE TABLE employees (
                id TEXT PRIMARY KEY,
                name TEXT,
                department TEXT,
                phone TEXT,
                attendance TEXT
            );",
        )
        .unwrap();
    for (id, attendance) in rows {
        legacy
            .execute(
                "INSERT INTO employees VALUES (?1, 'Ada', 'Eng', '12345678901', ?2);",
                [*id, *attendance],
            )
            .unwrap();
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn column_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info('employees') ORDER BY cid;")
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap();
    names
}
