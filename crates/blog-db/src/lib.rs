//! Storage layer for the blog posts service (in-memory + `PostgreSQL`).
//!
//! Every backend implements the [`PostStore`] capability trait, so the HTTP
//! layer and the tests depend only on the trait and never on a concrete
//! backend. The backend is selected once at startup.
//!
//! # Architecture
//!
//! ```text
//! Dispatcher (blog-api)
//!     |
//!     +-- Arc<dyn PostStore>
//!         |-- InMemoryPostStore   (counter + BTreeMap behind a RwLock)
//!         +-- PostgresPostStore   (one parameterized statement per call)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- The `PostStore` trait
//! - [`memory`] -- In-memory backend
//! - [`postgres`] -- `PostgreSQL` backend, pool configuration, connection parameters
//! - [`error`] -- Store error taxonomy

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::InMemoryPostStore;
pub use postgres::{ConnectionParams, PostRow, PostgresConfig, PostgresPostStore};
pub use store::PostStore;
