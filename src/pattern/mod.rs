//! Pattern tokenization: turns a human-authored format string into a typed
//! token stream the formatter interprets without ever re-scanning the
//! pattern text per record.

mod parser;

pub use parser::Parser;

/// A single element of a parsed pattern.
///
/// `severity` and `timestamp` are lifted to their own variants at parse time
/// so the formatter never has to compare placeholder names against those two
/// reserved words on the hot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text emitted verbatim, with `{{`/`}}` already collapsed to `{`/`}`.
    Literal(String),
    /// A generic attribute reference. `spec` includes its leading `:` when
    /// present, and is empty otherwise.
    Placeholder { name: String, spec: String },
    /// `{severity...}` — keyed to the record's severity, not an attribute.
    Severity { spec: String },
    /// `{timestamp...}` — `pattern` is an optional strftime sub-pattern.
    Timestamp { pattern: String, spec: String },
}

/// Parses `pattern` to completion, returning all tokens or the first error
/// encountered. Convenience over driving the `Parser` iterator by hand.
///
/// # Errors
/// Returns the first `ParseError` produced by the underlying `Parser`.
pub fn parse(pattern: &str) -> Result<Vec<Token>, crate::error::ParseError> {
    Parser::new(pattern).collect()
}
