//! In-memory task tracking.
//!
//! Raw task data is normalised by the validator into task records, which the
//! task service stores in an ordered sequence and exposes through create,
//! lookup, update, delete, filter and deadline-check operations. The typed
//! issue model (task, subtask, bug, story, epic) enforces its invariants at
//! construction. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Raw batch validation in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
