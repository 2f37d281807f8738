//! Diagnostics port.

use crate::task::domain::Diagnostic;

/// Receives the anomalies reported by the validator and the task service.
///
/// Sinks must not influence control flow; they only observe.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Records one anomaly.
    fn emit(&self, diagnostic: Diagnostic);
}
