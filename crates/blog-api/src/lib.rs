//! HTTP dispatcher for the blog posts service.
//!
//! This crate provides an Axum HTTP server that translates requests into
//! [`PostStore`](blog_db::PostStore) calls and store outcomes into status
//! codes and JSON bodies:
//!
//! - **Collection** (`GET /posts/`) lists every post
//! - **Item** (`GET|PUT|DELETE /posts/{id}`) reads, replaces, or removes
//!   one post
//! - **Creation** (`POST /posts/new`) stores a new post from form fields
//!
//! Any other method/path combination is answered with
//! `422 Unprocessable Entity`.
//!
//! # Architecture
//!
//! The store is injected once through [`AppState`] and shared by every
//! request. Handlers are stateless across requests; all persistence and
//! synchronization lives behind the store trait.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;
pub mod shutdown;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use shutdown::shutdown_signal;
pub use state::AppState;
