//! Axum router construction for the posts API.
//!
//! Every method router and the router itself fall back to
//! [`handlers::unprocessable`], so an unknown method or path is answered
//! with `422` rather than Axum's default `404`/`405`.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the posts service.
///
/// The router includes:
/// - `GET /posts/` -- list posts
/// - `GET /posts/{id}` -- single post
/// - `POST /posts/new` -- create a post from form fields
/// - `PUT /posts/{id}` -- replace a post's title and text
/// - `DELETE /posts/{id}` -- remove a post
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/posts/",
            get(handlers::list_posts).fallback(handlers::unprocessable),
        )
        .route(
            "/posts/{id}",
            get(handlers::get_post)
                .post(handlers::create_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post)
                .fallback(handlers::unprocessable),
        )
        .fallback(handlers::unprocessable)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
