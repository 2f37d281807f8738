//! Diagnostics sink backed by `tracing`.

use crate::task::{
    domain::{Diagnostic, Severity},
    ports::DiagnosticSink,
};
use tracing::{info, warn};

/// Forwards diagnostics to the `tracing` subscriber installed by the host.
///
/// Warnings are logged at `WARN`, informational traces at `INFO`. The batch
/// position and task id are attached as structured fields when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        let position = diagnostic.position();
        let task_id = diagnostic.task_id().map(|id| id.value());
        match diagnostic.severity() {
            Severity::Warning => warn!(?position, ?task_id, "{diagnostic}"),
            Severity::Info => info!(?position, ?task_id, "{diagnostic}"),
        }
    }
}
