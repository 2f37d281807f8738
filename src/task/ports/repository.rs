//! Repository port for the ordered task store.

use crate::task::domain::{TaskId, TaskRecord};
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Ordered task store contract.
///
/// Records keep their insertion order; replacing a record keeps its position
/// and removing one keeps the relative order of the rest.
pub trait TaskRepository {
    /// Returns every record in store order.
    fn records(&self) -> &[TaskRecord];

    /// Stores a new record at the end of the sequence.
    ///
    /// Records carrying [`TaskId::UNASSIGNED`] never collide with each other;
    /// they are placeholders for ids that could not be read.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when a record with the
    /// same assigned identifier already exists.
    fn append(&mut self, record: TaskRecord) -> TaskRepositoryResult<()>;

    /// Replaces the record with the same identifier in place and returns the
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record has the
    /// identifier.
    fn replace(&mut self, record: TaskRecord) -> TaskRepositoryResult<TaskRecord>;

    /// Removes the record with the given identifier.
    ///
    /// Returns `None` when the record does not exist.
    fn remove(&mut self, id: TaskId) -> Option<TaskRecord>;

    /// Finds the first record with the given identifier.
    fn find_by_id(&self, id: TaskId) -> Option<&TaskRecord> {
        self.records().iter().find(|record| record.id() == id)
    }

    /// Returns the largest identifier in the store.
    fn max_id(&self) -> Option<TaskId> {
        self.records().iter().map(TaskRecord::id).max()
    }

    /// Returns the number of stored records.
    fn len(&self) -> usize {
        self.records().len()
    }

    /// Returns `true` when the store holds no records.
    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The record was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl TaskRepositoryError {
    /// Returns the identifier the failed operation referred to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match self {
            Self::DuplicateTask(id) | Self::NotFound(id) => *id,
        }
    }
}
