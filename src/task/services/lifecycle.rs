//! Service layer for task creation, lookup, update, removal and queries.

use crate::task::{
    domain::{
        Diagnostic, Issue, Priority, Status, TaskDomainError, TaskId, TaskRecord, TaskRecordData,
    },
    ports::{DiagnosticSink, TaskRepository, TaskRepositoryError, TaskValidator},
    services::{CreateTaskRequest, TaskFilter, TaskPatch},
    validation::DefaultTaskValidator,
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task tracking service.
///
/// The service owns its repository and is the only component that mutates
/// it. Lookups that miss return `None` and report a diagnostic; they never
/// fail. Mutating operations take `&mut self`, so a host that shares the
/// service across threads has to wrap it in a lock.
pub struct TaskService<R, C, D>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    D: DiagnosticSink,
{
    repository: R,
    clock: Arc<C>,
    diagnostics: Arc<D>,
}

impl<R, C, D> TaskService<R, C, D>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    D: DiagnosticSink,
{
    /// Creates a service over an existing repository.
    #[must_use]
    pub const fn new(repository: R, clock: Arc<C>, diagnostics: Arc<D>) -> Self {
        Self {
            repository,
            clock,
            diagnostics,
        }
    }

    /// Creates a service seeded from a raw batch using the default validator.
    #[must_use]
    pub fn from_raw(raw: &Value, repository: R, clock: Arc<C>, diagnostics: Arc<D>) -> Self {
        Self::from_raw_with(raw, &DefaultTaskValidator::new(), repository, clock, diagnostics)
    }

    /// Creates a service seeded from a raw batch using `validator`.
    ///
    /// Records whose id is already in the store are skipped and reported as
    /// [`Diagnostic::DuplicateId`].
    #[must_use]
    pub fn from_raw_with(
        raw: &Value,
        validator: &impl TaskValidator,
        repository: R,
        clock: Arc<C>,
        diagnostics: Arc<D>,
    ) -> Self {
        let mut service = Self::new(repository, clock, diagnostics);
        let records = validator.validate(raw, &*service.diagnostics);
        for record in records {
            if let Err(err) = service.repository.append(record) {
                service
                    .diagnostics
                    .emit(Diagnostic::DuplicateId { id: err.task_id() });
            }
        }
        service
    }

    /// Returns every record in store order.
    #[must_use]
    pub fn records(&self) -> &[TaskRecord] {
        self.repository.records()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    /// Returns `true` when the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Consumes the service and returns its repository.
    #[must_use]
    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Finds a task by identifier.
    ///
    /// Returns `None` when no task has the identifier.
    #[must_use]
    pub fn get_by_id(&self, id: TaskId) -> Option<&TaskRecord> {
        self.repository.find_by_id(id)
    }

    /// Returns the identifier the next created task will receive.
    #[must_use]
    pub fn next_id(&self) -> TaskId {
        self.repository.max_id().map_or(TaskId::FIRST, TaskId::next)
    }

    /// Creates a task and appends it to the store.
    ///
    /// The task receives the next free identifier and the current time as
    /// its creation timestamp. Unknown status or priority values fall back to
    /// `todo` and `medium`; a missing description becomes an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank, or a
    /// repository error when the store rejects the record.
    pub fn create(&mut self, request: CreateTaskRequest) -> TaskServiceResult<TaskRecord> {
        let title = request.title().trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle.into());
        }

        let record = TaskRecord::new(TaskRecordData {
            id: self.next_id(),
            title: title.to_owned(),
            created_at: self.clock.utc(),
            description: Some(request.description().unwrap_or_default().to_owned()),
            status: self.resolve_status(request.status()),
            priority: self.resolve_priority(request.priority()),
            deadline: request.deadline(),
        });

        self.repository.append(record.clone())?;
        Ok(record)
    }

    /// Stores the record projection of a typed issue.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the issue id is
    /// already in use.
    pub fn insert_issue(&mut self, issue: &Issue) -> TaskServiceResult<TaskRecord> {
        let record = issue.to_record();
        self.repository.append(record.clone())?;
        Ok(record)
    }

    /// Applies `patch` to the task with the given identifier.
    ///
    /// The stored record is replaced in place by the merged record, which is
    /// also returned. Returns `Ok(None)` and leaves the store untouched when
    /// no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patch blanks the
    /// title.
    pub fn update(
        &mut self,
        id: TaskId,
        patch: &TaskPatch,
    ) -> TaskServiceResult<Option<TaskRecord>> {
        let Some(current) = self.repository.find_by_id(id) else {
            self.diagnostics.emit(Diagnostic::TaskNotFound { id });
            return Ok(None);
        };

        if patch.title().is_some_and(|title| title.trim().is_empty()) {
            return Err(TaskDomainError::EmptyTitle.into());
        }

        let updated = patch.apply(current);
        self.repository.replace(updated.clone())?;
        Ok(Some(updated))
    }

    /// Removes the task with the given identifier and returns the remaining
    /// records in store order.
    pub fn delete(&mut self, id: TaskId) -> &[TaskRecord] {
        if self.repository.remove(id).is_none() {
            self.diagnostics.emit(Diagnostic::TaskNotFound { id });
        }
        self.repository.records()
    }

    /// Returns the records matching every criterion of `filter`, in store
    /// order. An empty filter returns the whole store.
    #[must_use]
    pub fn filter(&self, filter: &TaskFilter) -> Vec<&TaskRecord> {
        let records = self.repository.records();
        if filter.is_empty() {
            return records.iter().collect();
        }
        records
            .iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Checks whether a finished task is still within its deadline.
    ///
    /// Returns `None` when no task has the identifier, `Some(false)` when the
    /// task has no deadline or is not done, and otherwise whether the current
    /// time is at or before the deadline.
    #[must_use]
    pub fn is_completed_before_deadline(&self, id: TaskId) -> Option<bool> {
        let record = self.repository.find_by_id(id)?;
        let title = record.title().to_owned();

        let Some(deadline) = record.deadline() else {
            self.diagnostics.emit(Diagnostic::MissingDeadline { title });
            return Some(false);
        };

        if record.status() != Status::Done {
            self.diagnostics.emit(Diagnostic::NotCompleted { title });
            return Some(false);
        }

        let on_time = self.clock.utc() <= deadline;
        self.diagnostics.emit(if on_time {
            Diagnostic::CompletedBeforeDeadline { title }
        } else {
            Diagnostic::CompletedAfterDeadline { title }
        });
        Some(on_time)
    }

    fn resolve_status(&self, raw: Option<&str>) -> Status {
        raw.map_or_else(Status::default, |text| {
            Status::try_from(text).unwrap_or_else(|err| {
                self.diagnostics.emit(Diagnostic::StatusDefaulted {
                    value: err.value,
                    position: None,
                });
                Status::default()
            })
        })
    }

    fn resolve_priority(&self, raw: Option<&str>) -> Priority {
        raw.map_or_else(Priority::default, |text| {
            Priority::try_from(text).unwrap_or_else(|err| {
                self.diagnostics.emit(Diagnostic::PriorityDefaulted {
                    value: err.value,
                    position: None,
                });
                Priority::default()
            })
        })
    }
}
