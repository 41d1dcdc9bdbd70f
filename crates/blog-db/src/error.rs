//! Error types for the storage layer.
//!
//! All store operations return [`StoreError`]. The named conditions
//! (`PostNotFound`, `PostNotCreated`, `PostsNotFound`) are part of the
//! store contract; the remaining variants wrap [`sqlx`] failures with the
//! operation that produced them.

use blog_types::PostId;

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No post has the requested id.
    #[error("could not find the post by id {id}")]
    PostNotFound {
        /// The id that was looked up.
        id: PostId,
    },

    /// The backend rejected an insert.
    #[error("could not create the post: {reason}")]
    PostNotCreated {
        /// Why the post was not created.
        reason: String,
        /// The driver error, when the rejection came from `PostgreSQL`.
        #[source]
        source: Option<sqlx::Error>,
    },

    /// Reading the full post collection failed.
    #[error("could not find posts: {source}")]
    PostsNotFound {
        /// The underlying driver error.
        source: sqlx::Error,
    },

    /// A `PostgreSQL` statement failed.
    #[error("{operation} failed: {source}")]
    Query {
        /// The store operation that issued the statement.
        operation: &'static str,
        /// The underlying driver error.
        source: sqlx::Error,
    },

    /// `PostgreSQL` could not be reached.
    #[error("PostgreSQL is unreachable: {0}")]
    Unreachable(#[source] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Whether this error is a lookup miss rather than a backend failure.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound { .. })
    }

    /// Whether this error originated in the database driver.
    pub const fn is_backend(&self) -> bool {
        matches!(
            self,
            Self::PostsNotFound { .. }
                | Self::Query { .. }
                | Self::Unreachable(_)
                | Self::Migration(_)
                | Self::PostNotCreated {
                    source: Some(_),
                    ..
                }
        )
    }
}
