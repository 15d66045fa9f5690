//! # Post Errors

use std::fmt;

use thiserror::Error;

/// Result type for post-level checks
pub type PostResult<T> = Result<T, PostError>;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetails {
    /// Field name as it appears on the wire
    pub field: String,
    /// Condition the field had to meet
    pub expected: String,
}

impl ValidationDetails {
    pub fn new(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
        }
    }

    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::new(field, "non-empty string")
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}", self.field, self.expected)
    }
}

/// Post validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    /// Payload fails structural validation
    #[error("Invalid post: {}", join_details(.0))]
    InvalidEntity(Vec<ValidationDetails>),
}

impl PostError {
    /// Fields that failed validation
    pub fn details(&self) -> &[ValidationDetails] {
        match self {
            PostError::InvalidEntity(details) => details,
        }
    }
}

fn join_details(details: &[ValidationDetails]) -> String {
    details
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
