//! # Post Repository
//!
//! The persistence port the HTTP handlers depend on, and the adapters
//! that implement it.
//!
//! - `InMemoryPostRepository`: process-local, insertion ordered
//! - `JsonFilePostRepository`: same ordering, persisted to a JSON file
//!
//! Not-found is reported as `RepositoryError::NotFound`, distinct from
//! every other failure.

mod errors;
mod json_file;
mod memory;

pub use errors::{RepositoryError, RepositoryResult};
pub use json_file::JsonFilePostRepository;
pub use memory::InMemoryPostRepository;

use crate::post::{Post, PostId};

/// Persistence port for posts
pub trait PostRepository: Send + Sync {
    /// All stored posts, in the store's own order
    fn find_all(&self) -> RepositoryResult<Vec<Post>>;

    /// The post with the given id, or `RepositoryError::NotFound`
    fn find_by_id(&self, id: PostId) -> RepositoryResult<Post>;

    /// Insert or wholesale-replace the post with `post.id`
    fn save(&self, post: Post) -> RepositoryResult<Post>;

    /// Remove the post with the given id. Absent ids are a no-op.
    fn delete_by_id(&self, id: PostId) -> RepositoryResult<()>;
}

/// Insert or replace `post` in an ordered list, keeping the position of
/// an existing entry with the same id.
fn upsert(posts: &mut Vec<Post>, post: Post) {
    match posts.iter_mut().find(|existing| existing.id == post.id) {
        Some(slot) => *slot = post,
        None => posts.push(post),
    }
}
