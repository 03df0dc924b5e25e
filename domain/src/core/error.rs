//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid quadrant: {0} (expected one of A, B, C, D)")]
    InvalidQuadrant(String),

    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Nothing to update")]
    NothingToUpdate,
}

impl DomainError {
    /// Check if this error was caused by user-supplied input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidQuadrant(_)
                | DomainError::EmptyTitle
                | DomainError::NothingToUpdate
        )
    }
}
