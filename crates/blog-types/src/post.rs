//! The `Post` record.
//!
//! A post is the only domain entity of the service. Its identifier is
//! assigned by the owning store at creation time and never changes
//! afterwards. On the wire a post is `{"id": int, "title": string,
//! "text": string}`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Store-assigned post identifier.
///
/// Matches the `BIGSERIAL` primary key of the `posts` table.
pub type PostId = i64;

/// A single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Post {
    /// Unique identifier, assigned by the store.
    #[ts(type = "number")]
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body. Stored in the `content` column of the relational backend.
    pub text: String,
}

impl Post {
    /// Build a post from its parts.
    pub fn new(id: PostId, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// The caller-supplied fields of a post, before the store assigns an id.
///
/// The input of both `PostStore::create` and `PostStore::update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub text: String,
}

impl NewPost {
    /// Build the input form of a post.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Attach a store-assigned id, producing the stored record.
    #[must_use]
    pub fn with_id(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            text: self.text,
        }
    }
}
