//! Field-level normalisation rules for raw task data.
//!
//! Each rule inspects one raw JSON field and returns either the typed value
//! or `None` when the field is malformed. Rules never report diagnostics;
//! the validator service decides what to report.

use crate::task::domain::{Priority, Status, TaskId};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

/// Format of date-only values such as `2025-09-28`.
const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Reads a task identifier.
///
/// Only non-negative integral numbers are accepted.
#[must_use]
pub fn read_id(value: Option<&Value>) -> Option<TaskId> {
    value.and_then(Value::as_u64).map(TaskId::new)
}

/// Reads a title; only strings are accepted.
#[must_use]
pub fn read_title(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

/// Reads a date value.
///
/// Accepts RFC 3339 timestamps and `YYYY-MM-DD` dates; the latter are read
/// as midnight UTC.
#[must_use]
pub fn read_date(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?.trim();
    DateTime::parse_from_rfc3339(text)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_ONLY_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}

/// Outcome of reading an optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionalField<T> {
    /// The field is absent.
    Missing,
    /// The field holds a valid value.
    Valid(T),
    /// The field is present but malformed.
    Invalid,
}

impl<T> OptionalField<T> {
    /// Returns the valid value, if any.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Missing | Self::Invalid => None,
        }
    }
}

/// Reads an optional description; anything but a string is malformed.
#[must_use]
pub fn read_description(value: Option<&Value>) -> OptionalField<String> {
    match value {
        None => OptionalField::Missing,
        Some(Value::String(text)) => OptionalField::Valid(text.clone()),
        Some(_) => OptionalField::Invalid,
    }
}

/// Reads an optional deadline; anything but a valid date is malformed.
#[must_use]
pub fn read_deadline(value: Option<&Value>) -> OptionalField<DateTime<Utc>> {
    value.map_or(OptionalField::Missing, |raw| {
        read_date(raw).map_or(OptionalField::Invalid, OptionalField::Valid)
    })
}

/// Reads a status, falling back to `default`.
///
/// The second element carries the rejected raw value when a non-null value
/// was present but outside the status vocabulary.
#[must_use]
pub fn read_status(value: Option<&Value>, default: Status) -> (Status, Option<String>) {
    read_vocabulary(value, default, |text| Status::try_from(text).ok())
}

/// Reads a priority, falling back to `default`.
///
/// The second element carries the rejected raw value when a non-null value
/// was present but outside the priority vocabulary.
#[must_use]
pub fn read_priority(value: Option<&Value>, default: Priority) -> (Priority, Option<String>) {
    read_vocabulary(value, default, |text| Priority::try_from(text).ok())
}

fn read_vocabulary<T: Copy>(
    value: Option<&Value>,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> (T, Option<String>) {
    match value {
        None | Some(Value::Null) => (default, None),
        Some(raw) => raw
            .as_str()
            .and_then(parse)
            .map_or_else(|| (default, Some(raw_text(raw))), |parsed| (parsed, None)),
    }
}

/// Renders a raw value as text: strings verbatim, `null` as empty, anything
/// else as its JSON form.
#[must_use]
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
