//! Tracing subscriber initialization.
//!
//! The terminal belongs to the list view while it runs, so logs are written
//! to a file. Follow them with `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects `RUST_LOG`, defaulting to `info`. Creates the log directory if it
/// doesn't exist.
///
/// # Errors
///
/// Fails if the directory can't be created, the path has no file name, or a
/// global subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    // A bare file name has an empty parent; log next to the working directory.
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("vlist_test_logs_create");
        let log_file = test_dir.join("test.log");

        let _ = fs::remove_dir_all(&test_dir);

        // May fail if another test already installed the subscriber
        let _ = init(&log_file);

        assert!(
            test_dir.exists(),
            "Log directory should be created: {:?}",
            test_dir
        );

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_succeeds_when_directory_already_exists() {
        let test_dir = std::env::temp_dir().join("vlist_test_logs_exists");
        let log_file = test_dir.join("test.log");

        let _ = fs::create_dir_all(&test_dir);

        let result = init(&log_file);
        assert!(
            matches!(result, Ok(()) | Err(LoggingError::SubscriberAlreadySet)),
            "unexpected result: {:?}",
            result
        );

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_rejects_path_without_file_name() {
        let result = init(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("vlist_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));

        let _ = fs::remove_dir_all(&test_dir);
    }
}
