//! REST endpoint handlers for the posts API.
//!
//! Each handler parses its inputs, makes exactly one store call, and maps
//! the outcome to a status code. Errors are converted by [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/posts/` | `200` + JSON array |
//! | `GET` | `/posts/{id}` | `200` + JSON post |
//! | `POST` | `/posts/new` | `201` + JSON post + `location` |
//! | `PUT` | `/posts/{id}` | `200` |
//! | `DELETE` | `/posts/{id}` | `204` |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::response::IntoResponse;
use blog_types::{Post, PostId};

use crate::error::ApiError;
use crate::extract::{PathSegment, PostForm};
use crate::state::AppState;

/// Path segment that selects creation under `POST /posts/{segment}`.
const CREATE_SEGMENT: &str = "new";

fn parse_id(raw: &str) -> Result<PostId, ApiError> {
    raw.parse::<PostId>().map_err(|source| ApiError::InvalidId {
        raw: raw.to_owned(),
        source,
    })
}

// ---------------------------------------------------------------------------
// GET /posts/
// ---------------------------------------------------------------------------

/// List every stored post.
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.store.get_all().await?;
    Ok(Json(posts))
}

// ---------------------------------------------------------------------------
// GET /posts/{id}
// ---------------------------------------------------------------------------

/// Fetch a single post by id.
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    PathSegment(raw_id): PathSegment,
) -> Result<Json<Post>, ApiError> {
    let id = parse_id(&raw_id)?;
    let post = state.store.get_by_id(id).await?;
    Ok(Json(post))
}

// ---------------------------------------------------------------------------
// POST /posts/new
// ---------------------------------------------------------------------------

/// Create a post from the `title` and `text` form fields.
///
/// Only the literal segment `new` is accepted; any other segment is an
/// unknown route.
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    PathSegment(segment): PathSegment,
    PostForm(input): PostForm,
) -> Result<impl IntoResponse, ApiError> {
    if segment != CREATE_SEGMENT {
        return Err(ApiError::UnknownRoute {
            method: Method::POST.to_string(),
            path: format!("/posts/{segment}"),
        });
    }

    let post = state.store.create(input).await?;
    tracing::info!(id = post.id, "Post created");

    let location = format!("/posts/{}", post.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(post),
    ))
}

// ---------------------------------------------------------------------------
// PUT /posts/{id}
// ---------------------------------------------------------------------------

/// Replace the title and text of an existing post.
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    PathSegment(raw_id): PathSegment,
    PostForm(input): PostForm,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    state.store.update(id, input).await?;
    tracing::info!(id, "Post updated");
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// DELETE /posts/{id}
// ---------------------------------------------------------------------------

/// Remove a post.
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    PathSegment(raw_id): PathSegment,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    state.store.delete(id).await?;
    tracing::info!(id, "Post deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Answer any unmatched method or path with `422`.
pub async fn unprocessable(req: Request) -> ApiError {
    let (parts, _body) = req.into_parts();
    ApiError::UnknownRoute {
        method: parts.method.to_string(),
        path: parts.uri.path().to_owned(),
    }
}
