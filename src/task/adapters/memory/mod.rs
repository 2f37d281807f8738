//! In-memory adapters for the task store and diagnostics ports.

mod diagnostics;
mod task;

pub use diagnostics::RecordingDiagnostics;
pub use task::InMemoryTaskRepository;
