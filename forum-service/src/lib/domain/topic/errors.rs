use thiserror::Error;

use crate::domain::topic::models::TopicId;

/// Error for topic text validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopicTextError {
    #[error("must not be blank")]
    Blank,
}

/// Top-level error for topic operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopicError {
    #[error("ID {0} does not exist.")]
    NotFound(TopicId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
