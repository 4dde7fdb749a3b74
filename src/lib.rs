#![forbid(unsafe_code)]

//! `cinderlog` is the core of a structured logging library: a pattern-string
//! tokenizer, a formatting pipeline built on top of it, and a sink layer
//! that routes formatted lines to durable backends.
//!
//! Key design choices:
//! - A small state-machine tokenizer (see [`pattern`]) turns a human-authored
//!   pattern into a typed token stream exactly once, so formatting a record
//!   never re-scans pattern text.
//! - `severity` and `timestamp` are reserved placeholder names lifted to
//!   their own token variants at parse time, rather than compared against on
//!   every formatted record.
//! - Two formatters ship: [`formatter::StringFormatter`] renders a parsed
//!   pattern against a record, and [`formatter::JsonFormatter`] ignores
//!   patterns entirely in favor of a configurable name-mapping and
//!   field-hierarchy.
//! - The file sink opens its handle lazily on first write and keeps it open
//!   until dropped, parameterized over a `FileBackend` trait so tests can
//!   substitute a mock that simulates open failure.
//! - A `Logger` binds one formatter to one or more sinks; a failure in one
//!   sink never prevents delivery to the others.
//!
//! # Example
//!
//! ```
//! use cinderlog::{Logger, Record};
//! use cinderlog::formatter::StringFormatter;
//! use cinderlog::sink::FileSink;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("app.log");
//!
//! let logger = Logger::builder()
//!     .formatter(Box::new(StringFormatter::new("[{severity}] {message}").unwrap()))
//!     .sink(Box::new(FileSink::new(&path)))
//!     .build();
//!
//! let record = Record::new().severity(2).message("started up");
//! logger.log(&record).unwrap();
//! ```

pub mod error;
pub mod format_spec;
pub mod formatter;
pub mod logger;
pub mod pattern;
pub mod record;
pub mod severity;
pub mod sink;
pub mod value;

// Flatten the most-used types to the crate root so callers can
// `use cinderlog::Logger` instead of `use cinderlog::logger::Logger`.
pub use error::{Error, ErrorKind, ParseError};
pub use logger::{Logger, LoggerBuilder};
pub use pattern::{Parser, Token};
pub use record::{Record, Timestamp};
pub use severity::{Level, LevelResolver, SeverityResolver};
pub use value::Value;
