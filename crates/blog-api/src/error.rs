//! Error types for the posts API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Status mapping:
//!
//! | Failure | Status |
//! |---------|--------|
//! | undecodable path segment, malformed id, missing form field, unknown route | `422` |
//! | any store error | `404` |

use std::num::ParseIntError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blog_db::StoreError;

/// Errors that can occur in the posts API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `{id}` path segment could not be decoded.
    #[error("invalid path segment: {0}")]
    InvalidSegment(String),

    /// The `{id}` path segment is not an integer.
    #[error("invalid post id {raw:?}: {source}")]
    InvalidId {
        /// The rejected path segment.
        raw: String,
        /// Why it did not parse.
        source: ParseIntError,
    },

    /// A required form field is missing or the form is malformed.
    #[error("invalid form: {0}")]
    InvalidForm(String),

    /// No route matches the method and path.
    #[error("unprocessable request: {method} {path}")]
    UnknownRoute {
        /// Request method.
        method: String,
        /// Request path.
        path: String,
    },

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// The HTTP status this error is answered with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidSegment(_)
            | Self::InvalidId { .. }
            | Self::InvalidForm(_)
            | Self::UnknownRoute { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Store(e) if e.is_backend() => {
                tracing::error!(error = %e, "store backend failure");
            }
            _ => tracing::debug!(error = %self, status = status.as_u16(), "request rejected"),
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_unprocessable() {
        let source = "abc".parse::<i64>().unwrap_err();
        let invalid_id = ApiError::InvalidId {
            raw: String::from("abc"),
            source,
        };
        assert_eq!(invalid_id.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(invalid_id.to_string().starts_with("invalid post id \"abc\""));
        assert_eq!(
            ApiError::InvalidForm(String::from("missing field `title`")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        let unknown = ApiError::UnknownRoute {
            method: String::from("PATCH"),
            path: String::from("/posts/1"),
        };
        assert_eq!(unknown.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(unknown.to_string(), "unprocessable request: PATCH /posts/1");

        let segment = ApiError::InvalidSegment(String::from("invalid utf-8"));
        assert_eq!(segment.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(segment.to_string(), "invalid path segment: invalid utf-8");
    }

    #[test]
    fn store_errors_are_not_found() {
        let not_found = ApiError::from(StoreError::PostNotFound { id: 2 });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let not_created = ApiError::from(StoreError::PostNotCreated {
            reason: String::from("insert rejected"),
            source: None,
        });
        assert_eq!(not_created.status(), StatusCode::NOT_FOUND);

        let backend = ApiError::from(StoreError::PostsNotFound {
            source: sqlx::Error::PoolClosed,
        });
        assert_eq!(backend.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_error_message_is_transparent() {
        let err = ApiError::from(StoreError::PostNotFound { id: 9 });
        assert_eq!(err.to_string(), "could not find the post by id 9");
    }
}
