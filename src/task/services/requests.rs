//! Request payloads accepted by the task service.

use crate::task::domain::{Priority, Status, TaskRecord, TaskRecordData};
use chrono::{DateTime, NaiveDate, Utc};

/// Request payload for creating a task.
///
/// Status and priority are taken as raw strings; values outside the closed
/// vocabularies fall back to the defaults when the task is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    deadline: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            deadline: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw status value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the raw priority value.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub(super) fn title(&self) -> &str {
        &self.title
    }

    pub(super) fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(super) fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(super) fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    pub(super) const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }
}

/// Partial update of a task.
///
/// Unset fields keep their current value; the identifier and creation
/// timestamp cannot be patched. The optional description and deadline can
/// also be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<Option<String>>,
    status: Option<Status>,
    priority: Option<Priority>,
    deadline: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(Some(deadline));
        self
    }

    /// Removes the deadline.
    #[must_use]
    pub const fn clear_deadline(mut self) -> Self {
        self.deadline = Some(None);
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.deadline.is_none()
    }

    /// Builds a new record from `current` with the patched fields overridden.
    #[must_use]
    pub fn apply(&self, current: &TaskRecord) -> TaskRecord {
        let base = current.to_data();
        TaskRecord::new(TaskRecordData {
            title: self
                .title
                .as_deref()
                .map_or(base.title, |title| title.trim().to_owned()),
            description: self.description.clone().unwrap_or(base.description),
            status: self.status.unwrap_or(base.status),
            priority: self.priority.unwrap_or(base.priority),
            deadline: self.deadline.unwrap_or(base.deadline),
            ..base
        })
    }
}

/// Selection criteria for [`filter`](super::TaskService::filter).
///
/// A record matches when it satisfies every criterion that is set. A filter
/// with no criteria matches every record.
///
/// # Examples
///
/// ```
/// use taskdesk::task::domain::{Priority, Status};
/// use taskdesk::task::services::TaskFilter;
///
/// let filter = TaskFilter::new()
///     .with_status(Status::Todo)
///     .with_status(Status::InProgress)
///     .with_priority(Priority::High);
/// assert!(!filter.is_empty());
/// assert!(TaskFilter::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    statuses: Option<Vec<Status>>,
    priorities: Option<Vec<Priority>>,
    created_on: Option<NaiveDate>,
}

impl TaskFilter {
    /// Creates a filter with no criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `status` to the accepted statuses.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.statuses.get_or_insert_with(Vec::new).push(status);
        self
    }

    /// Sets the accepted statuses. An empty set matches no record.
    #[must_use]
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    /// Adds `priority` to the accepted priorities.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priorities.get_or_insert_with(Vec::new).push(priority);
        self
    }

    /// Sets the accepted priorities. An empty set matches no record.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = Some(priorities.into_iter().collect());
        self
    }

    /// Restricts matches to records created on `date` (UTC calendar day).
    #[must_use]
    pub const fn created_on(mut self, date: NaiveDate) -> Self {
        self.created_on = Some(date);
        self
    }

    /// Returns `true` when no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.statuses.is_none() && self.priorities.is_none() && self.created_on.is_none()
    }

    /// Returns `true` when `record` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, record: &TaskRecord) -> bool {
        let status_ok = self
            .statuses
            .as_ref()
            .is_none_or(|accepted| accepted.contains(&record.status()));
        let priority_ok = self
            .priorities
            .as_ref()
            .is_none_or(|accepted| accepted.contains(&record.priority()));
        let date_ok = self
            .created_on
            .is_none_or(|date| record.created_on() == date);

        status_ok && priority_ok && date_ok
    }
}
