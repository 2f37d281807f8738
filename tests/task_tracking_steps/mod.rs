//! Step definitions for task tracking scenarios.

mod given;
mod then;
mod when;
pub mod world;
