//! Diagnostics sink that keeps every anomaly in memory.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::task::{
    domain::{Diagnostic, Severity},
    ports::DiagnosticSink,
};

/// Thread-safe sink recording diagnostics for later inspection.
///
/// Clones share the same buffer, so a test can hand one clone to the service
/// and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingDiagnostics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded diagnostics in emission order.
    #[must_use]
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Returns `true` when `diagnostic` was recorded.
    #[must_use]
    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.lock().contains(diagnostic)
    }

    /// Returns the number of recorded diagnostics with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.lock()
            .iter()
            .filter(|entry| entry.severity() == severity)
            .count()
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
