//! # API Errors
//!
//! Translates post and repository failures into HTTP responses.
//!
//! | Error | Status |
//! |---|---|
//! | `PostNotFound` | 404 |
//! | `InvalidEntity`, `MalformedBody` | 400 |
//! | `Repository` | 500 |
//!
//! Repository failures are logged and answered with a generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::post::{PostError, PostId};
use crate::repository::RepositoryError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the post handlers
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Requested post does not exist
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    /// Payload fails structural validation
    #[error("{0}")]
    InvalidEntity(#[from] PostError),

    /// Body is not a JSON post
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Any other persistence failure
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::PostNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidEntity(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to send to the client
    fn public_message(&self) -> String {
        match self {
            ApiError::Repository(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ApiError::PostNotFound(id),
            other => ApiError::Repository(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.public_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Repository(ref source) = self {
            error!(error = %source, "repository failure");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
