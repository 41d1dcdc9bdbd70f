//! Shared type definitions for the blog posts service.
//!
//! This crate is the single source of truth for the records exchanged
//! between the storage layer and the HTTP API. Types defined here flow
//! downstream to `TypeScript` via `ts-rs` for API clients.
//!
//! # Modules
//!
//! - [`post`] -- The `Post` record and its validated input form

pub mod post;

// Re-export all public types at crate root for convenience.
pub use post::{NewPost, Post, PostId};
