//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier of a task record, unique within a store.
///
/// Identifiers are assigned by the store as `max + 1`, so they are ordered
/// and dense in the common case. The zero value is reserved for records whose
/// raw identifier could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Placeholder identifier given to records whose raw id was malformed.
    pub const UNASSIGNED: Self = Self(0);

    /// Identifier handed out by an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` when the identifier is a real (positive) id.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }

    /// Returns the identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
