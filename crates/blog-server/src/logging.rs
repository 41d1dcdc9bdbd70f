//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::{LogFormat, LoggingConfig};

/// Errors that can occur while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    File {
        /// Log file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configured level or `RUST_LOG` is not a valid filter directive.
    #[error("invalid log level {level:?}: {source}")]
    Filter {
        /// The rejected directive.
        level: String,
        /// The parse error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Build the level filter.
///
/// `env_directives` is the value of `RUST_LOG`, if set. It wins over the
/// configured level and must parse; the level is only a fallback for an
/// unset variable.
fn build_filter(level: &str, env_directives: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let directives = env_directives.unwrap_or(level);
    EnvFilter::try_new(directives).map_err(|source| LoggingError::Filter {
        level: directives.to_owned(),
        source,
    })
}

/// Install the global `tracing` subscriber described by `config`.
///
/// # Errors
///
/// Returns a [`LoggingError`] if the log file cannot be opened, the level
/// or `RUST_LOG` does not parse, or a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let env_directives = std::env::var_os(EnvFilter::DEFAULT_ENV)
        .map(|v| v.to_string_lossy().into_owned());
    let filter = build_filter(&config.level, env_directives.as_deref())?;

    let (writer, ansi) = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::File {
                    path: path.clone(),
                    source,
                })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stdout), true),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| LoggingError::Init(e.to_string()))
}
