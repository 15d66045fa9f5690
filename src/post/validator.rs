//! Structural validation for incoming posts
//!
//! Only `title` and `body` are checked. `id`, `userId` and `version`
//! are accepted as long as they deserialized.

use super::errors::{PostError, PostResult, ValidationDetails};
use super::model::Post;

/// Validate a candidate post for create or update.
///
/// # Errors
///
/// Returns `PostError::InvalidEntity` naming every empty text field,
/// in wire order.
pub fn validate(candidate: &Post) -> PostResult<()> {
    let mut details = Vec::new();

    if candidate.title.is_empty() {
        details.push(ValidationDetails::empty_field("title"));
    }
    if candidate.body.is_empty() {
        details.push(ValidationDetails::empty_field("body"));
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(PostError::InvalidEntity(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(err: PostError) -> Vec<String> {
        err.details().iter().map(|d| d.field.clone()).collect()
    }

    #[test]
    fn test_valid_post_passes() {
        assert!(validate(&Post::new(1, 1, "Hello", "Welcome")).is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = validate(&Post::new(1, 1, "", "Welcome")).unwrap_err();
        assert_eq!(fields(err), vec!["title"]);
    }

    #[test]
    fn test_empty_body_rejected() {
        let err = validate(&Post::new(1, 1, "Hello", "")).unwrap_err();
        assert_eq!(fields(err), vec!["body"]);
    }

    #[test]
    fn test_both_empty_reports_both() {
        let err = validate(&Post::new(4, 4, "", "")).unwrap_err();
        assert_eq!(fields(err), vec!["title", "body"]);
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        assert!(validate(&Post::new(1, 1, " ", "\t")).is_ok());
    }

    #[test]
    fn test_ids_and_version_not_checked() {
        let post = Post::new(-5, 0, "t", "b").with_version(-1);
        assert!(validate(&post).is_ok());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let post = Post::new(1, 1, "", "b");
        for _ in 0..10 {
            assert_eq!(validate(&post), validate(&post));
        }
    }
}
