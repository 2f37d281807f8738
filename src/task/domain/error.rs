//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing typed task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidId(TaskId),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The creation date lies before the current calendar day.
    #[error("task cannot be created with a past date")]
    CreatedInPast,

    /// The subtask parent identifier is not a positive integer.
    #[error("invalid parent id {0}, expected a positive integer")]
    InvalidParentId(TaskId),

    /// The subtask names itself as its parent.
    #[error("subtask {0} cannot have itself as a parent")]
    SelfParent(TaskId),

    /// A blocked subtask was given the `done` status.
    #[error("blocked subtask {0} cannot have status 'done'")]
    BlockedSubtaskDone(TaskId),

    /// A required text field is empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A numeric field that must be strictly positive is zero.
    #[error("{field} must be a positive number")]
    NonPositiveField {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Error returned while parsing a closed vocabulary value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseVocabularyError {
    /// Vocabulary the value was checked against.
    pub kind: &'static str,
    /// The rejected raw value.
    pub value: String,
}

impl ParseVocabularyError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
