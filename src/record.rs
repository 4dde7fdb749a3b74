//! The record model: an ordered, uniquely-keyed attribute list plus the two
//! fields every formatter treats specially (severity and timestamp).

use crate::value::Value;
use chrono::{DateTime, Local};

/// A record's timestamp, carried as either a raw epoch or an already
/// zone-aware instant — callers that already have a `DateTime` shouldn't
/// have to round-trip through an integer to log it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    Epoch(i64),
    DateTime(DateTime<Local>),
}

impl Timestamp {
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Local> {
        match self {
            Self::Epoch(secs) => DateTime::from_timestamp(*secs, 0)
                .unwrap_or_default()
                .with_timezone(&Local),
            Self::DateTime(dt) => *dt,
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::DateTime(Local::now())
    }
}

impl From<i64> for Timestamp {
    fn from(epoch: i64) -> Self {
        Self::Epoch(epoch)
    }
}

impl From<DateTime<Local>> for Timestamp {
    fn from(dt: DateTime<Local>) -> Self {
        Self::DateTime(dt)
    }
}

/// `message` is the one attribute essentially every pattern references, so a
/// `Record` always reserves a slot for it up front instead of treating it as
/// just another name in the attribute list.
#[derive(Debug, Clone, Default)]
pub struct Record {
    attributes: Vec<(String, Value)>,
    severity: i64,
    timestamp: Timestamp,
}

impl Record {
    /// Empty record with severity 0 and a timestamp of "now" — callers add
    /// `message` and any other attributes via `with`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the record's severity (an opaque integer resolved by a
    /// `SeverityResolver` at format time).
    #[must_use]
    pub const fn severity(mut self, severity: i64) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the record's timestamp.
    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Convenience for the near-universal `message` attribute.
    #[must_use]
    pub fn message(self, message: impl Into<String>) -> Self {
        self.with("message", message.into())
    }

    /// Inserts or updates a named attribute. Re-inserting an existing name
    /// updates its value in place, preserving the original insertion
    /// position — the ordering the JSON formatter and round-trip invariant
    /// both depend on.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    #[must_use]
    pub const fn severity_value(&self) -> i64 {
        self.severity
    }

    #[must_use]
    pub const fn timestamp_value(&self) -> Timestamp {
        self.timestamp
    }

    /// Attributes in insertion order — the order both formatters iterate in.
    #[must_use]
    pub fn attributes(&self) -> &[(String, Value)] {
        &self.attributes
    }

    /// Looks up a single attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}
