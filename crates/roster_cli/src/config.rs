//! Shell configuration resolved from command-line arguments.
//!
//! # Responsibility
//! - Decide where the roster database and log files live.
//! - Keep path resolution out of the core crate.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Database file name used by earlier unversioned roster builds.
pub const DEFAULT_DB_FILE_NAME: &str = "employees.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// `None` disables file logging (no platform data directory available).
    pub log_dir: Option<PathBuf>,
}

impl ShellConfig {
    /// Fills unset values with defaults.
    ///
    /// - `db_path`: `employees.db` in the working directory.
    /// - `log_level`: build-mode default from the core crate.
    /// - `log_dir`: `<data-local-dir>/logs` for the roster application.
    pub fn resolve(
        db_path: Option<PathBuf>,
        log_level: Option<String>,
        log_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            db_path: db_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME)),
            log_level: log_level
                .unwrap_or_else(|| roster_core::default_log_level().to_string()),
            log_dir: log_dir.or_else(default_log_dir),
        }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "roster", "roster").map(|dirs| dirs.data_local_dir().join("logs"))
}

#[cfg(test)]
mod tests {
    use super::{ShellConfig, DEFAULT_DB_FILE_NAME};
    use std::path::PathBuf;

    #[test]
    fn explicit_values_win() {
        let config = ShellConfig::resolve(
            Some(PathBuf::from("/tmp/staff.db")),
            Some("warn".to_string()),
            Some(PathBuf::from("/tmp/roster-logs")),
        );
        assert_eq!(config.db_path, PathBuf::from("/tmp/staff.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/roster-logs")));
    }

    #[test]
    fn defaults_use_legacy_db_name_and_build_level() {
        let config = ShellConfig::resolve(None, None, None);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.log_level, roster_core::default_log_level());
    }
}
