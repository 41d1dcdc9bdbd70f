//! Shared application state for the posts API.
//!
//! [`AppState`] carries the one store instance selected at startup. Every
//! handler reads it through `State<Arc<AppState>>`; the store itself is
//! responsible for synchronizing concurrent access.

use std::fmt;
use std::sync::Arc;

use blog_db::PostStore;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The post store backing every route.
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    /// Wrap a store for sharing across handlers.
    pub const fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Convenience constructor returning the `Arc` the router expects.
    pub fn shared(store: Arc<dyn PostStore>) -> Arc<Self> {
        Arc::new(Self::new(store))
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
