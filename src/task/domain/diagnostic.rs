//! Structured anomalies reported by the validator and the task service.
//!
//! Diagnostics are observational: emitting one never changes the value an
//! operation returns.

use super::TaskId;
use std::fmt;

/// How serious an anomaly is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Informational trace of which branch an operation took.
    Info,
    /// Malformed input or a failed lookup.
    Warning,
}

/// An anomaly observed while validating input or serving a request.
///
/// Positions are 1-based indexes into the raw batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The raw batch was not an array.
    InvalidBatchShape,
    /// The record lacks a numeric `id`, a string `title`, or a valid
    /// `createdAt` date.
    InvalidStructure {
        /// Position of the record in the batch.
        position: usize,
    },
    /// The record was dropped by strict validation.
    RecordSkipped {
        /// Position of the record in the batch.
        position: usize,
    },
    /// The `description` field is present but not a string.
    InvalidDescription {
        /// Position of the record in the batch.
        position: usize,
    },
    /// The `deadline` field is present but not a valid date.
    InvalidDeadline {
        /// Position of the record in the batch.
        position: usize,
    },
    /// An unknown status value was replaced by the default.
    StatusDefaulted {
        /// The rejected raw value.
        value: String,
        /// Position of the record in the batch, when read from one.
        position: Option<usize>,
    },
    /// An unknown priority value was replaced by the default.
    PriorityDefaulted {
        /// The rejected raw value.
        value: String,
        /// Position of the record in the batch, when read from one.
        position: Option<usize>,
    },
    /// A record reused an id already present in the store.
    DuplicateId {
        /// The repeated identifier.
        id: TaskId,
    },
    /// No task matched the requested id.
    TaskNotFound {
        /// The requested identifier.
        id: TaskId,
    },
    /// Deadline check on a task without a deadline.
    MissingDeadline {
        /// Task title.
        title: String,
    },
    /// Deadline check on a task that is not done.
    NotCompleted {
        /// Task title.
        title: String,
    },
    /// The task was done on or before its deadline.
    CompletedBeforeDeadline {
        /// Task title.
        title: String,
    },
    /// The task is done but the deadline has passed.
    CompletedAfterDeadline {
        /// Task title.
        title: String,
    },
}

impl Diagnostic {
    /// Returns the severity of the anomaly.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::InvalidBatchShape
            | Self::InvalidStructure { .. }
            | Self::RecordSkipped { .. }
            | Self::InvalidDescription { .. }
            | Self::InvalidDeadline { .. }
            | Self::DuplicateId { .. }
            | Self::TaskNotFound { .. }
            | Self::MissingDeadline { .. } => Severity::Warning,
            Self::StatusDefaulted { .. }
            | Self::PriorityDefaulted { .. }
            | Self::NotCompleted { .. }
            | Self::CompletedBeforeDeadline { .. }
            | Self::CompletedAfterDeadline { .. } => Severity::Info,
        }
    }

    /// Returns the batch position the anomaly refers to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidStructure { position }
            | Self::RecordSkipped { position }
            | Self::InvalidDescription { position }
            | Self::InvalidDeadline { position } => Some(*position),
            Self::StatusDefaulted { position, .. } | Self::PriorityDefaulted { position, .. } => {
                *position
            }
            _ => None,
        }
    }

    /// Returns the task identifier the anomaly refers to, if any.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::DuplicateId { id } | Self::TaskNotFound { id } => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBatchShape => f.write_str("invalid task data format, expected an array"),
            Self::InvalidStructure { position } => {
                write!(f, "invalid task structure at index {position}")
            }
            Self::RecordSkipped { position } => {
                write!(f, "skipped malformed task at index {position}")
            }
            Self::InvalidDescription { position } => {
                write!(f, "the \"description\" field in task #{position} must be a string")
            }
            Self::InvalidDeadline { position } => {
                write!(f, "the \"deadline\" field in task #{position} must be a date")
            }
            Self::StatusDefaulted { value, position } => {
                write!(f, "unknown status \"{value}\"")?;
                write_position(f, *position)?;
                f.write_str(" replaced by the default")
            }
            Self::PriorityDefaulted { value, position } => {
                write!(f, "unknown priority \"{value}\"")?;
                write_position(f, *position)?;
                f.write_str(" replaced by the default")
            }
            Self::DuplicateId { id } => write!(f, "task id {id} is already in use"),
            Self::TaskNotFound { id } => write!(f, "task with id {id} was not found"),
            Self::MissingDeadline { title } => write!(f, "task \"{title}\" has no deadline"),
            Self::NotCompleted { title } => write!(f, "task \"{title}\" is not completed yet"),
            Self::CompletedBeforeDeadline { title } => {
                write!(f, "task \"{title}\" completed before the deadline")
            }
            Self::CompletedAfterDeadline { title } => {
                write!(f, "task \"{title}\" was completed after the deadline")
            }
        }
    }
}

fn write_position(f: &mut fmt::Formatter<'_>, position: Option<usize>) -> fmt::Result {
    match position {
        Some(index) => write!(f, " in task #{index}"),
        None => Ok(()),
    }
}
