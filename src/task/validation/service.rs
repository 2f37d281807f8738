//! Validation service implementation.
//!
//! Provides the default implementation of the `TaskValidator` port, applying
//! the field rules to every record of a raw batch.

use crate::task::{
    domain::{Diagnostic, TaskId, TaskRecord, TaskRecordData},
    ports::{DiagnosticSink, TaskValidator, ValidationConfig, ValidationMode},
    validation::rules::{self, OptionalField},
};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Default implementation of the task validator.
///
/// Records are normalised independently: an anomaly in one record never
/// affects its siblings.
///
/// # Examples
///
/// ```
/// use taskdesk::task::adapters::memory::RecordingDiagnostics;
/// use taskdesk::task::domain::{Priority, Status};
/// use taskdesk::task::ports::TaskValidator;
/// use taskdesk::task::validation::DefaultTaskValidator;
/// use serde_json::json;
///
/// let diagnostics = RecordingDiagnostics::new();
/// let raw = json!([{ "id": 1, "title": "Write docs", "createdAt": "2025-09-28" }]);
///
/// let records = DefaultTaskValidator::new().validate(&raw, &diagnostics);
/// assert_eq!(records.len(), 1);
/// assert!(records.iter().all(|record| record.status() == Status::Todo));
/// assert!(records.iter().all(|record| record.priority() == Priority::Medium));
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: ValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a validator with the tolerant default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    fn normalize(
        &self,
        item: &Value,
        position: usize,
        diagnostics: &dyn DiagnosticSink,
    ) -> Option<TaskRecord> {
        let id = rules::read_id(item.get("id"));
        let title = rules::read_title(item.get("title"));
        let created_at = item.get("createdAt").and_then(rules::read_date);

        if id.is_none() || title.is_none() || created_at.is_none() {
            diagnostics.emit(Diagnostic::InvalidStructure { position });
            if self.config.mode == ValidationMode::Strict {
                diagnostics.emit(Diagnostic::RecordSkipped { position });
                return None;
            }
        }

        let description = rules::read_description(item.get("description"));
        if description == OptionalField::Invalid {
            diagnostics.emit(Diagnostic::InvalidDescription { position });
        }

        let deadline = rules::read_deadline(item.get("deadline"));
        if deadline == OptionalField::Invalid {
            diagnostics.emit(Diagnostic::InvalidDeadline { position });
        }

        let (status, rejected_status) =
            rules::read_status(item.get("status"), self.config.default_status);
        if let Some(value) = rejected_status {
            diagnostics.emit(Diagnostic::StatusDefaulted {
                value,
                position: Some(position),
            });
        }

        let (priority, rejected_priority) =
            rules::read_priority(item.get("priority"), self.config.default_priority);
        if let Some(value) = rejected_priority {
            diagnostics.emit(Diagnostic::PriorityDefaulted {
                value,
                position: Some(position),
            });
        }

        Some(TaskRecord::new(TaskRecordData {
            id: id.unwrap_or(TaskId::UNASSIGNED),
            title: title.map_or_else(
                || item.get("title").map(rules::raw_text).unwrap_or_default(),
                str::to_owned,
            ),
            created_at: created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            description: description.into_option(),
            status,
            priority,
            deadline: deadline.into_option(),
        }))
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, raw: &Value, diagnostics: &dyn DiagnosticSink) -> Vec<TaskRecord> {
        let Some(items) = raw.as_array() else {
            diagnostics.emit(Diagnostic::InvalidBatchShape);
            return Vec::new();
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| self.normalize(item, index + 1, diagnostics))
            .collect()
    }
}

/// Validates a raw batch with the default configuration.
#[must_use]
pub fn validate_tasks(raw: &Value, diagnostics: &dyn DiagnosticSink) -> Vec<TaskRecord> {
    DefaultTaskValidator::new().validate(raw, diagnostics)
}

// Note: Unit tests for DefaultTaskValidator are located in
// src/task/tests/validation_tests.rs.
