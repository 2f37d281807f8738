//! Domain model for task tracking.
//!
//! The domain holds the closed vocabularies, the store record, the typed
//! issue variants, and the diagnostics vocabulary, and stays free of any
//! infrastructure concern.

mod diagnostic;
mod error;
mod ids;
mod issue;
mod record;
mod vocabulary;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{ParseVocabularyError, TaskDomainError};
pub use ids::TaskId;
pub use issue::{Issue, IssueKind, IssueSummary, NewTask, TaskBase};
pub use record::{TaskRecord, TaskRecordData};
pub use vocabulary::{IssueType, Priority, Status};
