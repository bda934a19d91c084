//! Domain-level error types.

use thiserror::Error;

/// Reasons a request is rejected before storage is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Post id is required")]
    MissingId,

    #[error("Title is {len} characters long, at most {max} are allowed")]
    TitleTooLong { len: usize, max: usize },

    #[error("Category {0} does not exist")]
    UnknownCategory(i32),
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
