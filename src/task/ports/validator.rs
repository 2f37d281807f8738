//! Validator port for raw task batches.
//!
//! Defines the interface that turns untrusted input into task records.

use super::DiagnosticSink;
use crate::task::domain::{Priority, Status, TaskRecord};
use serde_json::Value;

/// Port for normalising raw task data.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Never fail: anomalies are reported to the sink, not returned
/// - Process each record independently of its siblings
/// - Preserve input order
pub trait TaskValidator: Send + Sync {
    /// Normalises a raw batch into task records.
    ///
    /// Input that is not an array yields an empty batch.
    fn validate(&self, raw: &Value, diagnostics: &dyn DiagnosticSink) -> Vec<TaskRecord>;
}

/// How the validator treats records whose core fields are malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Keep the record, coercing malformed core fields to placeholders.
    #[default]
    Tolerant,
    /// Drop the record.
    Strict,
}

/// Configuration for raw batch validation.
///
/// # Examples
///
/// ```
/// use taskdesk::task::ports::validator::{ValidationConfig, ValidationMode};
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.mode, ValidationMode::Tolerant);
///
/// let strict = ValidationConfig::strict();
/// assert_eq!(strict.mode, ValidationMode::Strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Treatment of structurally invalid records.
    pub mode: ValidationMode,
    /// Status given to records with a missing or unknown status.
    pub default_status: Status,
    /// Priority given to records with a missing or unknown priority.
    pub default_priority: Priority,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl ValidationConfig {
    /// Creates the tolerant configuration: every record is kept.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            mode: ValidationMode::Tolerant,
            default_status: Status::Todo,
            default_priority: Priority::Medium,
        }
    }

    /// Creates a strict configuration that drops structurally invalid records.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
            ..Self::lenient()
        }
    }
}
