use thiserror::Error;

/// Business errors raised by the post store.
///
/// Both kinds are recoverable: the store is left unchanged whenever one fires.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found.", entity)) }

    pub fn conflict(field: &str) -> Self { Self::Conflict(format!("{} already exists.", field)) }

    /// Human readable detail without the kind prefix
    pub fn detail(&self) -> &str {
        match self {
            ServiceError::NotFound(msg) | ServiceError::Conflict(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_format_detail() {
        let e = ServiceError::not_found("Post");
        assert_eq!(e.detail(), "Post not found.");
        assert_eq!(e.to_string(), "not found: Post not found.");

        let e = ServiceError::conflict("Post title");
        assert_eq!(e.detail(), "Post title already exists.");
    }
}
