//! Consuming builder for `Logger` — mirrors the fluent `.sink(...).build()`
//! style used throughout this crate's configuration surfaces.

use super::Logger;
use crate::formatter::Formatter;
use crate::sink::Sink;

/// Accumulates a formatter and sinks before producing an immutable `Logger`.
#[derive(Default)]
pub struct LoggerBuilder {
    formatter: Option<Box<dyn Formatter>>,
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            formatter: None,
            sinks: Vec::new(),
        }
    }

    /// Sets the formatter every record is rendered through before reaching
    /// any sink.
    #[must_use]
    pub fn formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Adds a sink. Multiple sinks each receive every record independently.
    #[must_use]
    pub fn sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Builds the logger.
    ///
    /// # Panics
    /// Panics if no formatter was set — a `Logger` with nowhere to render
    /// records is a construction-time programming error, not a runtime one.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            formatter: self.formatter.expect("LoggerBuilder::formatter must be set before build"),
            sinks: self.sinks,
        }
    }
}
