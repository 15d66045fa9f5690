//! Post model and its JSON wire form.

use serde::{Deserialize, Serialize};

/// Identifier of a post
pub type PostId = i32;

/// A single post
///
/// Serialized as `{"id", "userId", "title", "body", "version"}`.
/// A payload without `title` or `body` deserializes with an empty
/// string there, so the validator rejects it instead of serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Caller-supplied identifier
    pub id: PostId,

    /// Owning user (not checked against anything)
    pub user_id: i32,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    /// Opaque optimistic-concurrency value
    #[serde(default)]
    pub version: Option<i32>,
}

impl Post {
    /// Create a post without a version
    pub fn new(
        id: PostId,
        user_id: i32,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
            version: None,
        }
    }

    /// Return a copy carrying the given version
    pub fn with_version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }
}
