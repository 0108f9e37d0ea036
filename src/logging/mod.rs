//! Structured logging setup.
//!
//! Installs a `tracing` subscriber with a console layer on standard error
//! and, when configured, a plain-text layer appending to a log file. The
//! filter comes from `RUST_LOG` when set and from the configured level
//! otherwise.

use crate::config::{AppConfig, FsError, open_parent_dir};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use std::fs::File;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::fmt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// The log file could not be opened.
    #[error("failed to open log file '{path}': {source}")]
    File {
        /// Configured log file path.
        path: String,
        /// Underlying filesystem error.
        source: FsError,
    },
    /// A global subscriber is already installed.
    #[error(transparent)]
    Install(#[from] TryInitError),
}

/// Builds the event filter from `RUST_LOG`, falling back to `level`.
///
/// # Errors
///
/// Returns [`LoggingError::Filter`] when `level` is not a valid directive.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(LoggingError::from)
}

/// Opens `path` for appending, creating it and its parent directories.
///
/// # Errors
///
/// Returns [`LoggingError::File`] when a directory or the file cannot be
/// created.
pub fn open_log_file(path: &Utf8Path) -> Result<File, LoggingError> {
    let file_error = |source: FsError| LoggingError::File {
        path: path.to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) {
        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(|err| file_error(err.into()))?;
    }
    let (dir, file_name) = open_parent_dir(path).map_err(file_error)?;
    let file = dir
        .open_with(file_name, OpenOptions::new().create(true).append(true))
        .map_err(|err| file_error(err.into()))?;
    Ok(file.into_std())
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns [`LoggingError`] when the filter is invalid, the log file cannot
/// be opened, or a subscriber is already installed.
pub fn init(config: &AppConfig) -> Result<(), LoggingError> {
    let filter = build_filter(&config.log_level)?;
    let file_layer = config
        .log_file
        .as_deref()
        .map(|path| open_log_file(Utf8Path::new(path)))
        .transpose()?
        .map(|file| {
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file))
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{LoggingError, build_filter, open_log_file};
    use camino::Utf8PathBuf;
    use std::io::Write;

    #[test]
    fn open_log_file_creates_missing_directories_and_appends() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("nested/logs/app.log"))
            .expect("utf-8 path");

        let mut first = open_log_file(&path).expect("open log file");
        first.write_all(b"one\n").expect("write");
        let mut second = open_log_file(&path).expect("reopen log file");
        second.write_all(b"two\n").expect("write");

        let contents = std::fs::read_to_string(path.as_std_path()).expect("read back");
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn invalid_level_is_rejected_when_env_is_unset() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        assert!(matches!(
            build_filter("codewringer=loud"),
            Err(LoggingError::Filter(_))
        ));
    }
}
