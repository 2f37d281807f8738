//! Raw task batch validation.
//!
//! This module provides the default implementation of the validator port:
//! field rules in [`rules`] and the batch validator in [`service`].

pub mod rules;
pub mod service;

pub use service::{DefaultTaskValidator, validate_tasks};
