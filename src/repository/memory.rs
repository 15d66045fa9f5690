//! # In-Memory Repository

use std::sync::RwLock;

use crate::post::{Post, PostId};

use super::errors::{RepositoryError, RepositoryResult};
use super::{upsert, PostRepository};

/// Process-local post store, ordered by first insertion
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given posts, in order
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut stored = Vec::new();
        for post in posts {
            upsert(&mut stored, post);
        }
        Self {
            posts: RwLock::new(stored),
        }
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Internal("Lock poisoned".to_string())
}

impl PostRepository for InMemoryPostRepository {
    fn find_all(&self) -> RepositoryResult<Vec<Post>> {
        let posts = self.posts.read().map_err(|_| poisoned())?;
        Ok(posts.clone())
    }

    fn find_by_id(&self, id: PostId) -> RepositoryResult<Post> {
        let posts = self.posts.read().map_err(|_| poisoned())?;
        posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn save(&self, post: Post) -> RepositoryResult<Post> {
        let mut posts = self.posts.write().map_err(|_| poisoned())?;
        upsert(&mut posts, post.clone());
        Ok(post)
    }

    fn delete_by_id(&self, id: PostId) -> RepositoryResult<()> {
        let mut posts = self.posts.write().map_err(|_| poisoned())?;
        posts.retain(|post| post.id != id);
        Ok(())
    }
}
