//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

impl DomainError {
    pub fn blog_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Blog",
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_field() {
        let err = DomainError::Validation(vec!["title".to_string(), "content".to_string()]);
        assert_eq!(err.to_string(), "Validation failed: title, content");
    }

    #[test]
    fn test_blog_not_found_message() {
        let err = DomainError::blog_not_found("blog-42");
        assert_eq!(err.to_string(), "Entity not found: Blog with id blog-42");
    }
}
