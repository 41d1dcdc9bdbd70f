//! Error types for the service binary.

use blog_api::ServerError;
use blog_db::StoreError;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level errors that abort the service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The store could not be configured, reached, or migrated.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] ServerError),
}
