//! Formatters turn a `Record` into a finished message string. Two shapes
//! ship: a pattern-driven `StringFormatter` and a schema-free `JsonFormatter`.

mod json;
mod string;

pub use json::{JsonConfig, JsonFormatter};
pub use string::StringFormatter;

use crate::error::Error;
use crate::record::Record;

/// A formatter consumes a record and produces the line a sink will receive.
/// Closed to a small set of known implementations (string, JSON) rather than
/// left fully open, matching the source's subclass-virtual dispatch.
pub trait Formatter: Send + Sync {
    /// # Errors
    /// Returns an error if the record cannot be rendered (e.g. a
    /// placeholder references a missing attribute).
    fn format(&self, record: &Record) -> Result<String, Error>;
}
