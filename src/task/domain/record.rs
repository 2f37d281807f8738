//! Task record stored and returned by the task service.

use super::{Priority, Status, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A normalised task record.
///
/// Records serialise to the same camelCase shape the validator accepts, so a
/// serialised batch of records validates back to identical records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    id: TaskId,
    title: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: Status,
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deadline: Option<DateTime<Utc>>,
}

/// Parameter object for assembling a [`TaskRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecordData {
    /// Record identifier.
    pub id: TaskId,
    /// Record title.
    pub title: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Free-form description, if any.
    pub description: Option<String>,
    /// Workflow status.
    pub status: Status,
    /// Urgency.
    pub priority: Priority,
    /// Due timestamp, if any.
    pub deadline: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Assembles a record from its parts.
    #[must_use]
    pub fn new(data: TaskRecordData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            created_at: data.created_at,
            description: data.description,
            status: data.status,
            priority: data.priority,
            deadline: data.deadline,
        }
    }

    /// Returns a copy of the record's parts, ready to be overridden field by
    /// field and reassembled with [`TaskRecord::new`].
    #[must_use]
    pub fn to_data(&self) -> TaskRecordData {
        TaskRecordData {
            id: self.id,
            title: self.title.clone(),
            created_at: self.created_at,
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            deadline: self.deadline,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the calendar day (UTC) the record was created on.
    #[must_use]
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }
}
