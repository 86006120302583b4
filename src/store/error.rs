//! Error types for exam store operations.

use crate::models::ExamId;
use crate::persistence::PersistenceError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for exam store operations.
///
/// Every failure is returned as a value; the store never panics on caller
/// input. Conflicts carry the full list of collision descriptions so a
/// caller can present exactly which exams are in the way.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Malformed or missing input; recoverable by correcting the request.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An exam with this id is already stored.
    #[error("exam {0} already exists")]
    DuplicateId(ExamId),

    /// The operation targets an id that is not stored.
    #[error("exam {0} not found")]
    NotFound(ExamId),

    /// The candidate schedule collides with one or more stored exams,
    /// along the batch dimension, the venue dimension, or both.
    #[error("schedule conflict: {}", .0.join("; "))]
    Conflict(Vec<String>),

    /// Snapshot I/O failure surfaced at startup. Write-side failures after
    /// an applied mutation are logged instead of returned.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The collision descriptions carried by a `Conflict`, if any.
    pub fn conflict_details(&self) -> Option<&[String]> {
        match self {
            Self::Conflict(details) => Some(details),
            _ => None,
        }
    }
}
