//! In-memory post store.
//!
//! Holds a monotonically increasing id counter and a `BTreeMap` of posts
//! behind a single [`RwLock`], so concurrent creates never hand out the
//! same id. Nothing is persisted; state is lost on process exit.

use std::collections::BTreeMap;

use async_trait::async_trait;
use blog_types::{NewPost, Post, PostId};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::PostStore;

/// Counter and records guarded together.
#[derive(Debug, Default)]
struct Inner {
    counter: PostId,
    posts: BTreeMap<PostId, Post>,
}

/// Post store backed by process memory.
#[derive(Debug)]
pub struct InMemoryPostStore {
    inner: RwLock<Inner>,
}

impl InMemoryPostStore {
    /// Create a store pre-seeded with the sample post `{1, "title", "text"}`.
    pub fn new() -> Self {
        Self::with_posts([Post::new(1, "title", "text")])
    }

    /// Create a store with no posts. The first created post gets id 1.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Create a store seeded with the given posts.
    ///
    /// The id counter starts at the highest seeded id, so new posts never
    /// collide with seeded ones.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let posts: BTreeMap<PostId, Post> = posts.into_iter().map(|p| (p.id, p)).collect();
        let counter = posts.keys().next_back().copied().unwrap_or(0).max(0);
        Self {
            inner: RwLock::new(Inner { counter, posts }),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.inner.read().await.posts.len()
    }

    /// Whether the store holds no posts.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.posts.is_empty()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn connect(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Post>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.posts.values().cloned().collect())
    }

    async fn get_by_id(&self, id: PostId) -> Result<Post, StoreError> {
        let inner = self.inner.read().await;
        inner
            .posts
            .get(&id)
            .cloned()
            .ok_or(StoreError::PostNotFound { id })
    }

    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .counter
            .checked_add(1)
            .ok_or_else(|| StoreError::PostNotCreated {
                reason: String::from("id space exhausted"),
                source: None,
            })?;

        let post = post.with_id(id);
        inner.counter = id;
        inner.posts.insert(id, post.clone());

        tracing::debug!(id, "Created post in memory");
        Ok(post)
    }

    async fn update(&self, id: PostId, post: NewPost) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let stored = inner
            .posts
            .get_mut(&id)
            .ok_or(StoreError::PostNotFound { id })?;
        *stored = post.with_id(id);
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::PostNotFound { id })
    }
}
