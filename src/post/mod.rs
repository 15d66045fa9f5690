//! # Post Entity
//!
//! The single entity managed by postdrive, plus the structural
//! validation applied before any create or update reaches the store.
//!
//! # Invariants
//!
//! - A post is accepted for create/update only if `title` and `body` are non-empty
//! - Validation has no side effects and never touches the store
//! - `version` is carried through unchanged

mod errors;
mod model;
mod validator;

pub use errors::{PostError, PostResult, ValidationDetails};
pub use model::{Post, PostId};
pub use validator::validate;
