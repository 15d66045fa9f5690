//! # JSON File Repository
//!
//! Keeps the full post list in memory and rewrites the backing file
//! after every mutation. The file is written to a sibling temp file and
//! renamed over the original, so readers never see a half-written store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::post::{Post, PostId};

use super::errors::{RepositoryError, RepositoryResult};
use super::{upsert, PostRepository};

/// On-disk layout
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    updated_at: DateTime<Utc>,
    posts: Vec<Post>,
}

/// Post store persisted as a single JSON document
#[derive(Debug)]
pub struct JsonFilePostRepository {
    path: PathBuf,
    posts: RwLock<Vec<Post>>,
}

impl JsonFilePostRepository {
    /// Open the store at `path`. A missing file is an empty store and is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let path = path.into();
        let posts = Self::load(&path)?;
        debug!(path = %path.display(), count = posts.len(), "opened post store");

        Ok(Self {
            path,
            posts: RwLock::new(posts),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> RepositoryResult<Vec<Post>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepositoryError::IoError(e.to_string())),
        };

        let file: StoreFile = serde_json::from_str(&content)
            .map_err(|e| RepositoryError::Corrupt(format!("{}: {}", path.display(), e)))?;
        Ok(file.posts)
    }

    fn persist(&self, posts: &[Post]) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RepositoryError::IoError(e.to_string()))?;
            }
        }

        let file = StoreFile {
            updated_at: Utc::now(),
            posts: posts.to_vec(),
        };
        let data = serde_json::to_vec_pretty(&file)
            .map_err(|e| RepositoryError::Internal(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).map_err(|e| RepositoryError::IoError(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| RepositoryError::IoError(e.to_string()))
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Internal("Lock poisoned".to_string())
}

impl PostRepository for JsonFilePostRepository {
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

        // Persist a staged copy so a failed write leaves memory untouched
        let mut staged = posts.clone();
        upsert(&mut staged, post.clone());
        self.persist(&staged)?;
        *posts = staged;

        Ok(post)
    }

    fn delete_by_id(&self, id: PostId) -> RepositoryResult<()> {
        let mut posts = self.posts.write().map_err(|_| poisoned())?;
        if !posts.iter().any(|post| post.id == id) {
            return Ok(());
        }

        let staged: Vec<Post> = posts.iter().filter(|post| post.id != id).cloned().collect();
        self.persist(&staged)?;
        *posts = staged;

        Ok(())
    }
}
