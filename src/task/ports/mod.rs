//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod diagnostics;
pub mod repository;
pub mod validator;

pub use diagnostics::DiagnosticSink;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskValidator, ValidationConfig, ValidationMode};
