//! Post HTTP Routes
//!
//! CRUD endpoints for the post resource. Each handler validates (where
//! a payload is involved), makes its repository calls, and picks the
//! success status. Failures go through `ApiError`.
//!
//! | Operation | Success |
//! |---|---|
//! | list | 200 |
//! | get | 200 |
//! | create | 201 |
//! | update | 202 |
//! | delete | 204 |

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info, warn};

use crate::post::{validate, Post, PostId};
use crate::repository::{InMemoryPostRepository, PostRepository};

use super::errors::ApiResult;

// ==================
// Shared State
// ==================

/// Post state shared across handlers
pub struct PostState {
    pub repository: Arc<dyn PostRepository>,
}

impl PostState {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    /// State backed by an empty in-memory repository
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }
}

// ==================
// Post Routes
// ==================

/// Create post routes, to be nested under `/api`
pub fn post_routes(state: Arc<PostState>) -> Router {
    Router::new()
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route(
            "/posts/:id",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_posts_handler(State(state): State<Arc<PostState>>) -> ApiResult<Json<Vec<Post>>> {
    let posts = state.repository.find_all()?;
    debug!(count = posts.len(), "listed posts");
    Ok(Json(posts))
}

async fn get_post_handler(
    State(state): State<Arc<PostState>>,
    Path(id): Path<PostId>,
) -> ApiResult<Json<Post>> {
    let post = state.repository.find_by_id(id)?;
    Ok(Json(post))
}

async fn create_post_handler(
    State(state): State<Arc<PostState>>,
    payload: Result<Json<Post>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let Json(post) = payload?;
    validate(&post)?;

    let saved = state.repository.save(post)?;
    info!(id = saved.id, user_id = saved.user_id, "created post");

    Ok((StatusCode::CREATED, Json(saved)))
}

async fn update_post_handler(
    State(state): State<Arc<PostState>>,
    Path(id): Path<PostId>,
    payload: Result<Json<Post>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    // Existence is checked before the payload is looked at, so an
    // unknown id is 404 whatever the body holds.
    state.repository.find_by_id(id)?;

    let Json(post) = payload?;
    validate(&post)?;

    if post.id != id {
        warn!(path_id = id, body_id = post.id, "update body id differs from path id");
    }

    let saved = state.repository.save(post)?;
    info!(id = saved.id, version = ?saved.version, "updated post");

    Ok((StatusCode::ACCEPTED, Json(saved)))
}

async fn delete_post_handler(
    State(state): State<Arc<PostState>>,
    Path(id): Path<PostId>,
) -> ApiResult<StatusCode> {
    state.repository.delete_by_id(id)?;
    info!(id, "deleted post");
    Ok(StatusCode::NO_CONTENT)
}
