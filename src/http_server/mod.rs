//! # postdrive HTTP Server Module
//!
//! Axum server exposing the post resource.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/posts` - List posts
//! - `GET /api/posts/:id` - Get one post
//! - `POST /api/posts` - Create a post (201)
//! - `PUT /api/posts/:id` - Replace a post (202)
//! - `DELETE /api/posts/:id` - Delete a post (204, idempotent)

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod post_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use post_routes::{post_routes, PostState};
pub use server::HttpServer;
