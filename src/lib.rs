//! Taskdesk: in-memory task tracking.
//!
//! This crate models tasks and their issue-type variants, normalises raw
//! task data into well-formed records, and serves create, read, update,
//! delete, filter and deadline-check operations over a process-local store.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage, validation and
//!   diagnostics
//! - **Adapters**: Concrete implementations of ports (in-memory store,
//!   `tracing` diagnostics)
//!
//! # Modules
//!
//! - [`task`]: Task model, validation and the task service

pub mod task;
