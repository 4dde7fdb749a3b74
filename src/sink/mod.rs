//! Sinks consume finished message strings. The file sink is the only
//! production backend the core ships; `Sink` is the seam other transports
//! would plug into.

mod file;

pub use file::{FileBackend, FileSink, StdFileBackend};

use crate::error::Error;

/// A destination for formatted log lines.
pub trait Sink: Send + Sync {
    /// # Errors
    /// Returns an error if the message could not be durably delivered.
    fn consume(&self, message: &str) -> Result<(), Error>;

    /// Flushes any buffering beyond what `consume` already guarantees.
    /// Default no-op — most sinks flush on every `consume`.
    ///
    /// # Errors
    /// Returns an error if flushing fails.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}
