//! The post store capability trait.
//!
//! [`PostStore`] is object-safe so the HTTP layer can hold an
//! `Arc<dyn PostStore>` and stay ignorant of the backend. All operations
//! are async to accommodate `PostgreSQL`; the in-memory backend simply
//! never suspends on I/O.

use async_trait::async_trait;
use blog_types::{NewPost, Post, PostId};

use crate::error::StoreError;

/// Common storage interface for blog posts.
///
/// Implemented by [`InMemoryPostStore`](crate::InMemoryPostStore) and
/// [`PostgresPostStore`](crate::PostgresPostStore).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Verify the backend is reachable before serving traffic.
    async fn connect(&self) -> Result<(), StoreError>;

    /// Release backend resources. Calling it more than once is harmless.
    async fn disconnect(&self) -> Result<(), StoreError>;

    /// Return every stored post. Order is unspecified; an empty store
    /// yields an empty vector.
    async fn get_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Return the post with the given id, or [`StoreError::PostNotFound`].
    async fn get_by_id(&self, id: PostId) -> Result<Post, StoreError>;

    /// Store a new post under the next id and return it.
    async fn create(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Replace the title and text of an existing post.
    async fn update(&self, id: PostId, post: NewPost) -> Result<(), StoreError>;

    /// Remove an existing post.
    async fn delete(&self, id: PostId) -> Result<(), StoreError>;
}
