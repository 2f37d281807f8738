//! In-memory ordered task store.

use crate::task::{
    domain::{TaskId, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Ordered in-memory task repository.
///
/// Lookups are linear scans. The store is owned by a single task service and
/// carries no internal locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryTaskRepository {
    records: Vec<TaskRecord>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Consumes the repository and returns its records in store order.
    #[must_use]
    pub fn into_records(self) -> Vec<TaskRecord> {
        self.records
    }

    fn position_of(&self, id: TaskId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    fn append(&mut self, record: TaskRecord) -> TaskRepositoryResult<()> {
        if record.id().is_assigned() && self.position_of(record.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(record.id()));
        }
        self.records.push(record);
        Ok(())
    }

    fn replace(&mut self, record: TaskRecord) -> TaskRepositoryResult<TaskRecord> {
        let id = record.id();
        let slot = self
            .records
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(std::mem::replace(slot, record))
    }

    fn remove(&mut self, id: TaskId) -> Option<TaskRecord> {
        self.position_of(id).map(|index| self.records.remove(index))
    }
}
