//! Unified error type for the parser, formatters, and sink.

use std::path::PathBuf;

/// Which parser rule rejected the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// EOF inside a placeholder, or a bare `}` in literal position.
    Illformed,
    /// A non-identifier character appeared inside a placeholder name.
    InvalidPlaceholder,
    /// The parser already failed once; it is permanently broken.
    BrokenParser,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Illformed => write!(f, "illformed pattern"),
            Self::InvalidPlaceholder => write!(f, "invalid placeholder"),
            Self::BrokenParser => write!(f, "parser is broken after a previous error"),
        }
    }
}

/// A positioned parse failure, carrying the full pattern for context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Byte offset from the start of `pattern`.
    pub position: usize,
    pub pattern: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at byte {} in pattern {:?}",
            self.kind, self.position, self.pattern
        )
    }
}

impl std::error::Error for ParseError {}

/// Error type for cinderlog operations.
#[derive(Debug)]
pub enum Error {
    /// Pattern tokenization failed.
    Parse(ParseError),
    /// A placeholder referenced an attribute absent from the record.
    MissingAttribute { name: String },
    /// The file sink could not open its backing file.
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Any other I/O failure (e.g. a write after a successful open).
    Io(std::io::Error),
    /// JSON serialization failed.
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::MissingAttribute { name } => write!(f, "missing attribute: {name}"),
            Self::OpenFailed { path, source } => {
                write!(f, "failed to open {} for append: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::OpenFailed { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::MissingAttribute { .. } => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
