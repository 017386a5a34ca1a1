//! Runtime configuration for the demo programs.
//!
//! # Responsibility
//! - Resolve data file locations and logging settings.
//! - Apply `STOCKROOM_*` environment overrides on top of defaults.
//!
//! # Invariants
//! - Every file path is derived from `data_dir` unless overridden explicitly.
//! - The default log directory is absolute, as `init_logging` requires.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const ENV_DATA_DIR: &str = "STOCKROOM_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "STOCKROOM_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STOCKROOM_LOG_DIR";

const INVENTORY_FILE_NAME: &str = "inventory.json";
const STUDENTS_FILE_NAME: &str = "students.txt";
const REPORT_FILE_NAME: &str = "report.txt";
const LOG_DIR_NAME: &str = "stockroom-logs";

/// Logger level and output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// One of `trace|debug|info|warn|error` (case-insensitive).
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl LogSettings {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self::new(
            default_log_level(),
            std::env::temp_dir().join(LOG_DIR_NAME),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub inventory_file: PathBuf,
    pub students_file: PathBuf,
    pub report_file: PathBuf,
    pub log: LogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_data_dir(".")
    }
}

impl AppConfig {
    /// Builds a config whose data files all live under `data_dir`.
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            inventory_file: data_dir.join(INVENTORY_FILE_NAME),
            students_file: data_dir.join(STUDENTS_FILE_NAME),
            report_file: data_dir.join(REPORT_FILE_NAME),
            data_dir,
            log: LogSettings::default(),
        }
    }

    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps a variable name to a value.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = match read(ENV_DATA_DIR) {
            Some(dir) => Self::with_data_dir(dir),
            None => Self::default(),
        };
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log.level = level;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log.log_dir = PathBuf::from(dir);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ENV_DATA_DIR, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_place_files_in_current_dir_and_logs_in_absolute_dir() {
        let config = AppConfig::default();
        assert_eq!(config.inventory_file, PathBuf::from("./inventory.json"));
        assert_eq!(config.students_file, PathBuf::from("./students.txt"));
        assert_eq!(config.report_file, PathBuf::from("./report.txt"));
        assert!(config.log.log_dir.is_absolute());
    }

    #[test]
    fn env_overrides_data_dir_and_log_settings() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/srv/stockroom"),
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_DIR, "/var/log/stockroom"),
        ]));
        assert_eq!(
            config.inventory_file,
            PathBuf::from("/srv/stockroom/inventory.json")
        );
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.log_dir, PathBuf::from("/var/log/stockroom"));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "  ")]));
        assert_eq!(config.log, AppConfig::default().log);
    }
}
