//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::ports::FieldErrors;

/// Domain errors - business logic failures surfaced by the post service.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("User not authorized")]
    NotAuthorized,

    #[error("User already liked this post")]
    AlreadyLiked,

    #[error("User has not liked this post")]
    NotLiked,

    #[error("Comment {id} does not exist")]
    CommentNotFound { id: Uuid },

    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    #[error("Store failure: {0}")]
    Store(#[from] RepoError),
}

impl DomainError {
    pub fn post_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity_type: "post",
            id,
        }
    }

    pub fn profile_not_found(user_id: Uuid) -> Self {
        Self::NotFound {
            entity_type: "profile",
            id: user_id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
