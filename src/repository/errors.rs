//! # Repository Errors

use thiserror::Error;

use crate::post::PostId;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Post repository errors
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// No post with this id
    #[error("Post not found: {0}")]
    NotFound(PostId),

    /// Backing file could not be read or written
    #[error("I/O error: {0}")]
    IoError(String),

    /// Backing file exists but does not hold a post store
    #[error("Corrupt store: {0}")]
    Corrupt(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Whether this is the not-found signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct() {
        assert!(RepositoryError::NotFound(999).is_not_found());
        assert!(!RepositoryError::IoError("disk".into()).is_not_found());
        assert!(!RepositoryError::Internal("lock".into()).is_not_found());
    }

    #[test]
    fn test_display() {
        assert_eq!(RepositoryError::NotFound(42).to_string(), "Post not found: 42");
    }
}
