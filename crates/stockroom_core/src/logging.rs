//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start the rolling file logger once per process.
//! - Capture panics as structured `event=panic_captured` lines.
//!
//! # Invariants
//! - Re-initializing with identical settings is a no-op.
//! - Re-initializing with a different level or directory is rejected.
//! - Initialization never panics.

use crate::config::LogSettings;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "stockroom";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging with `settings`.
///
/// # Errors
/// - Unsupported level, empty or relative directory.
/// - Directory creation or logger backend failure.
/// - A previous call already started logging with different settings.
pub fn init_logging(settings: &LogSettings) -> Result<(), String> {
    let level = normalize_level(&settings.level)?;
    let log_dir = normalize_log_dir(&settings.log_dir)?;

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &log_dir))?;
    ensure_same_settings(active, level, &log_dir)
}

/// Returns `(level, log_dir)` of the active logger, if started.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: LevelFilter, log_dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let spec = level.to_string().to_ascii_lowercase();
    let handle = Logger::try_with_str(&spec)
        .map_err(|err| format!("invalid log level `{spec}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook_once();

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

fn ensure_same_settings(
    active: &ActiveLogger,
    level: LevelFilter,
    log_dir: &Path,
) -> Result<(), String> {
    if active.log_dir != log_dir {
        return Err(format!(
            "logging already started at `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            log_dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already started with level `{}`; refusing to switch to `{}`",
            active.level, level
        ));
    }
    Ok(())
}

/// Parses a level name; `warning` is accepted as an alias of `warn`.
fn normalize_level(level: &str) -> Result<LevelFilter, String> {
    let trimmed = level.trim();
    let name = if trimmed.eq_ignore_ascii_case("warning") {
        "warn"
    } else {
        trimmed
    };
    name.parse::<LevelFilter>().map_err(|_| {
        format!("unsupported log level `{trimmed}`; expected off|trace|debug|info|warn|error")
    })
}

fn normalize_log_dir(log_dir: &Path) -> Result<PathBuf, String> {
    if log_dir.as_os_str().is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    if !log_dir.is_absolute() {
        return Err(format!(
            "log_dir must be an absolute path, got `{}`",
            log_dir.display()
        ));
    }
    Ok(log_dir.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            sanitize_message(panic_text(panic_info.payload()), MAX_PANIC_PAYLOAD_CHARS)
        );
        previous_hook(panic_info);
    }));
}

fn panic_text(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

/// Keeps a log line on one line and at most `max_chars` characters plus `...`.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let mut sanitized: String = chars
        .by_ref()
        .take(max_chars)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if chars.next().is_some() {
        sanitized.push_str("...");
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, normalize_level, normalize_log_dir, panic_text,
        sanitize_message,
    };
    use crate::config::LogSettings;
    use crate::repo::keyed_repo::RepoError;
    use log::LevelFilter;
    use std::any::Any;
    use std::path::Path;

    #[test]
    fn level_names_parse_to_filters() {
        assert_eq!(normalize_level("INFO").unwrap(), LevelFilter::Info);
        assert_eq!(normalize_level(" warning ").unwrap(), LevelFilter::Warn);
        assert_eq!(normalize_level("off").unwrap(), LevelFilter::Off);
        let err = normalize_level("verbose").unwrap_err();
        assert!(err.contains("`verbose`"));
    }

    #[test]
    fn log_dir_must_be_absolute() {
        assert!(normalize_log_dir(Path::new("data/logs"))
            .unwrap_err()
            .contains("absolute"));
        assert!(normalize_log_dir(Path::new("")).unwrap_err().contains("empty"));
        let dir = std::env::temp_dir().join("stockroom-logs");
        assert_eq!(normalize_log_dir(&dir).unwrap(), dir);
    }

    #[test]
    fn panic_text_reads_repository_error_messages() {
        let owned: Box<dyn Any + Send> = Box::new(RepoError::NotFound(999).to_string());
        assert_eq!(panic_text(owned.as_ref()), "entity key 999 not found");

        let literal: Box<dyn Any + Send> = Box::new("shelf lock poisoned");
        assert_eq!(panic_text(literal.as_ref()), "shelf lock poisoned");

        let other: Box<dyn Any + Send> = Box::new(101_i32);
        assert_eq!(panic_text(other.as_ref()), "non-string panic payload");
    }

    #[test]
    fn multi_line_item_names_are_flattened_and_capped() {
        assert_eq!(
            sanitize_message("Wireless\nMouse\tPro", 40),
            "Wireless Mouse Pro"
        );
        assert_eq!(sanitize_message("Basmati Rice 5kg", 7), "Basmati...");
        assert_eq!(sanitize_message("Rice", 4), "Rice");
    }

    #[test]
    fn second_init_must_match_the_first() {
        let run = format!("stockroom-logs-{}", std::process::id());
        let first = std::env::temp_dir().join(&run).join("warehouse");
        let second = std::env::temp_dir().join(&run).join("finance");
        let settings = LogSettings::new("info", &first);

        init_logging(&settings).unwrap();
        init_logging(&settings).unwrap();

        let level_err = init_logging(&LogSettings::new("debug", &first)).unwrap_err();
        assert!(level_err.contains("refusing to switch"));
        let dir_err = init_logging(&LogSettings::new("info", &second)).unwrap_err();
        assert!(dir_err.contains("refusing to switch"));

        assert_eq!(logging_status(), Some((LevelFilter::Info, first)));
    }
}
