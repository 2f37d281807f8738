//! Typed task model: the shared task base and its issue-type variants.
//!
//! Every value in this module is validated when it is built. An [`Issue`]
//! that exists satisfies both the base invariants (positive id, non-empty
//! title, creation date not in the past) and the invariants of its variant.

use super::{IssueType, Priority, Status, TaskDomainError, TaskId, TaskRecord, TaskRecordData};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Deserializer, Serialize};

/// Unvalidated input for the fields every issue shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Requested identifier; must be positive.
    pub id: TaskId,
    /// Title; trimmed and must not be empty.
    pub title: String,
    /// Creation timestamp; must not fall on a past calendar day.
    pub created_at: DateTime<Utc>,
    /// Optional description, trimmed when present.
    pub description: Option<String>,
    /// Optional workflow status.
    pub status: Option<Status>,
    /// Optional priority.
    pub priority: Option<Priority>,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Creates input with the required fields and no optional ones.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at,
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

    /// Sets the workflow status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Validated fields shared by every issue type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBase {
    id: TaskId,
    title: String,
    created_at: DateTime<Utc>,
    description: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    deadline: Option<DateTime<Utc>>,
}

impl TaskBase {
    /// Validates the shared task fields.
    ///
    /// The creation date is compared with the clock's current calendar day
    /// (UTC); the time of day is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidId`] for a zero id,
    /// [`TaskDomainError::EmptyTitle`] for a blank title, and
    /// [`TaskDomainError::CreatedInPast`] when `created_at` falls before today.
    pub fn new(input: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        if !input.id.is_assigned() {
            return Err(TaskDomainError::InvalidId(input.id));
        }

        let title = input.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        if input.created_at.date_naive() < clock.utc().date_naive() {
            return Err(TaskDomainError::CreatedInPast);
        }

        Ok(Self {
            id: input.id,
            title: title.to_owned(),
            created_at: input.created_at,
            description: input.description.map(|text| text.trim().to_owned()),
            status: input.status,
            priority: input.priority,
            deadline: input.deadline,
        })
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the trimmed description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status, if set.
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        self.status
    }

    /// Returns the priority, if set.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the deadline, if set.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }
}

/// Issue-type tag together with the fields that type adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum IssueKind {
    /// Plain task.
    Task,
    /// Task nested under a parent.
    Subtask {
        /// Identifier of the parent task.
        parent_id: TaskId,
        /// Whether progress is blocked.
        is_blocked: bool,
    },
    /// Defect report.
    Bug {
        /// Environment the defect shows up in.
        environment: String,
        /// How to trigger the defect.
        steps_to_reproduce: String,
    },
    /// User story.
    Story {
        /// Estimated effort.
        story_points: u32,
        /// Estimated value to the business.
        business_value: u32,
    },
    /// Epic.
    Epic {
        /// Person accountable for the epic.
        owner: String,
        /// Planned release date, if known.
        release_date: Option<DateTime<Utc>>,
    },
}

impl IssueKind {
    /// Describes an unblocked subtask of `parent_id`.
    #[must_use]
    pub const fn subtask(parent_id: TaskId) -> Self {
        Self::Subtask {
            parent_id,
            is_blocked: false,
        }
    }

    /// Returns the issue-type tag.
    #[must_use]
    pub const fn issue_type(&self) -> IssueType {
        match self {
            Self::Task => IssueType::Task,
            Self::Subtask { .. } => IssueType::Subtask,
            Self::Bug { .. } => IssueType::Bug,
            Self::Story { .. } => IssueType::Story,
            Self::Epic { .. } => IssueType::Epic,
        }
    }

    /// Checks the variant invariants against the already validated base and
    /// returns the normalised variant.
    fn validated(self, base: &TaskBase) -> Result<Self, TaskDomainError> {
        match self {
            Self::Task => Ok(Self::Task),
            Self::Subtask {
                parent_id,
                is_blocked,
            } => {
                if !parent_id.is_assigned() {
                    return Err(TaskDomainError::InvalidParentId(parent_id));
                }
                if parent_id == base.id {
                    return Err(TaskDomainError::SelfParent(base.id));
                }
                if is_blocked && base.status == Some(Status::Done) {
                    return Err(TaskDomainError::BlockedSubtaskDone(base.id));
                }
                Ok(Self::Subtask {
                    parent_id,
                    is_blocked,
                })
            }
            Self::Bug {
                environment,
                steps_to_reproduce,
            } => {
                require_text("environment", &environment)?;
                require_text("stepsToReproduce", &steps_to_reproduce)?;
                Ok(Self::Bug {
                    environment,
                    steps_to_reproduce,
                })
            }
            Self::Story {
                story_points,
                business_value,
            } => {
                require_positive("storyPoints", story_points)?;
                require_positive("businessValue", business_value)?;
                Ok(Self::Story {
                    story_points,
                    business_value,
                })
            }
            Self::Epic {
                owner,
                release_date,
            } => {
                require_text("owner", &owner)?;
                Ok(Self::Epic {
                    owner: owner.trim().to_owned(),
                    release_date,
                })
            }
        }
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), TaskDomainError> {
    if value.trim().is_empty() {
        return Err(TaskDomainError::EmptyField { field });
    }
    Ok(())
}

const fn require_positive(field: &'static str, value: u32) -> Result<(), TaskDomainError> {
    if value == 0 {
        return Err(TaskDomainError::NonPositiveField { field });
    }
    Ok(())
}

/// A validated task of a specific issue type.
///
/// Deserialising an issue runs the same checks as [`Issue::new`] against the
/// system clock, so a document describing an invalid issue is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    base: TaskBase,
    kind: IssueKind,
}

impl Issue {
    /// Validates the shared fields and the variant fields together.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskDomainError`] raised by the base or the
    /// variant invariants.
    pub fn new(
        input: NewTask,
        kind: IssueKind,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let base = TaskBase::new(input, clock)?;
        let validated_kind = kind.validated(&base)?;
        Ok(Self {
            base,
            kind: validated_kind,
        })
    }

    /// Returns the shared task fields.
    #[must_use]
    pub const fn base(&self) -> &TaskBase {
        &self.base
    }

    /// Returns the variant payload.
    #[must_use]
    pub const fn kind(&self) -> &IssueKind {
        &self.kind
    }

    /// Returns the issue-type tag.
    #[must_use]
    pub const fn issue_type(&self) -> IssueType {
        self.kind.issue_type()
    }

    /// Returns a summary of the issue for display.
    #[must_use]
    pub fn summary(&self) -> IssueSummary {
        IssueSummary {
            title: self.base.title.clone(),
            status: self.base.status,
            priority: self.base.priority,
            deadline: self.base.deadline,
            kind: self.kind.clone(),
        }
    }

    /// Projects the issue onto a store record, filling in the default status
    /// and priority when they were left unset.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord::new(TaskRecordData {
            id: self.base.id,
            title: self.base.title.clone(),
            created_at: self.base.created_at,
            description: self.base.description.clone(),
            status: self.base.status.unwrap_or_default(),
            priority: self.base.priority.unwrap_or_default(),
            deadline: self.base.deadline,
        })
    }
}

/// Unchecked wire form of an [`Issue`].
#[derive(Deserialize)]
struct IssueDocument {
    base: BaseDocument,
    kind: IssueKind,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BaseDocument {
    id: TaskId,
    title: String,
    created_at: DateTime<Utc>,
    description: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    deadline: Option<DateTime<Utc>>,
}

impl BaseDocument {
    fn into_new_task(self) -> NewTask {
        NewTask {
            id: self.id,
            title: self.title,
            created_at: self.created_at,
            description: self.description,
            status: self.status,
            priority: self.priority,
            deadline: self.deadline,
        }
    }
}

impl<'de> Deserialize<'de> for Issue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = IssueDocument::deserialize(deserializer)?;
        Self::new(document.base.into_new_task(), document.kind, &DefaultClock)
            .map_err(serde::de::Error::custom)
    }
}

/// Display-oriented view of an issue: the headline fields plus the
/// type-specific payload, tagged with its issue type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    /// Issue title.
    pub title: String,
    /// Workflow status, if set.
    pub status: Option<Status>,
    /// Priority, if set.
    pub priority: Option<Priority>,
    /// Deadline, if set.
    pub deadline: Option<DateTime<Utc>>,
    /// Issue-type tag and type-specific fields.
    #[serde(flatten)]
    pub kind: IssueKind,
}
