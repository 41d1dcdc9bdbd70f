//! Request extraction for the posts endpoints.
//!
//! [`PostForm`] reads `title` and `text` from the query string and, when
//! the request is `application/x-www-form-urlencoded`, from the body as
//! well. Body values take precedence. Both fields must end up present.
//!
//! [`PathSegment`] is the `{id}` path parameter, decoded but not yet
//! parsed. Both extractors reject with [`ApiError`], so a bad request is
//! always answered with `422` and a JSON body.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::{Form, RequestExt as _};
use blog_types::NewPost;
use serde::Deserialize;

use crate::error::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw, possibly incomplete form fields.
#[derive(Debug, Default, Deserialize)]
struct RawPostForm {
    title: Option<String>,
    text: Option<String>,
}

impl RawPostForm {
    /// Overlay `other` on top of `self`; fields present in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            title: other.title.or(self.title),
            text: other.text.or(self.text),
        }
    }

    /// Require both fields.
    fn validate(self) -> Result<PostForm, ApiError> {
        let title = self
            .title
            .ok_or_else(|| ApiError::InvalidForm(String::from("missing field `title`")))?;
        let text = self
            .text
            .ok_or_else(|| ApiError::InvalidForm(String::from("missing field `text`")))?;
        Ok(PostForm(NewPost { title, text }))
    }
}

/// A post form with both fields present, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm(pub NewPost);

impl From<PostForm> for NewPost {
    fn from(form: PostForm) -> Self {
        form.0
    }
}

fn is_form_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with(FORM_CONTENT_TYPE))
}

impl<S> FromRequest<S> for PostForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<RawPostForm>::try_from_uri(req.uri())
            .map_err(|e| ApiError::InvalidForm(e.body_text()))?;

        let raw = if is_form_encoded(&req) {
            let Form(body) = req
                .extract::<Form<RawPostForm>, _>()
                .await
                .map_err(|e| ApiError::InvalidForm(e.body_text()))?;
            query.merge(body)
        } else {
            query
        };

        raw.validate()
    }
}

/// The single `{id}` segment of an item route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment(pub String);

impl<S> FromRequestParts<S> for PathSegment
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidSegment(e.body_text()))?;
        Ok(Self(segment))
    }
}
