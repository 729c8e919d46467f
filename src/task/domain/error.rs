//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The rating is outside the accepted range.
    #[error("rating {0} is out of range, expected 0 to 5")]
    RatingOutOfRange(u8),
}
