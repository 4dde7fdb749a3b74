//! The frontend: binds one formatter to one or more sinks. `Logger::log`
//! is the whole record path — `record -> formatter -> sink.consume(string)`.

mod builder;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::formatter::Formatter;
use crate::record::Record;
use crate::sink::Sink;

/// Binds a formatter to its sinks. Construct via `Logger::builder()`.
pub struct Logger {
    formatter: Box<dyn Formatter>,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Formats `record` once and delivers it to every sink. A failure in one
    /// sink does not stop delivery to the others — every sink is tried, and
    /// the first error encountered (if any) is returned once all have run.
    ///
    /// # Errors
    /// Returns the formatter's error, or the first sink error encountered
    /// after every sink has been attempted.
    pub fn log(&self, record: &Record) -> Result<(), Error> {
        let message = self.formatter.format(record)?;

        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.consume(&message)
                && first_error.is_none()
            {
                first_error = Some(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Flushes every attached sink, returning the first error encountered.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), Error> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    /// Tests and diagnostics need to verify how many sinks are wired up.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}
