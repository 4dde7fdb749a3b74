//! Pattern-driven formatter: binds a pre-parsed token sequence to a record.

use super::Formatter;
use crate::error::Error;
use crate::format_spec::FormatSpec;
use crate::pattern::{self, Token};
use crate::record::Record;
use crate::severity::{LevelResolver, SeverityResolver};

const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S.%f";

/// Renders a pattern against records. Parses the pattern exactly once at
/// construction — `format` never re-scans the pattern text.
pub struct StringFormatter {
    tokens: Vec<Token>,
    resolver: Box<dyn SeverityResolver>,
}

impl StringFormatter {
    /// Parses `pattern` once and binds the default (`trace`..`error`)
    /// severity resolver.
    ///
    /// # Errors
    /// Returns a `ParseError` (wrapped in `Error::Parse`) if the pattern is
    /// malformed.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::with_resolver(pattern, LevelResolver)
    }

    /// Parses `pattern` once, binding a caller-supplied severity resolver.
    ///
    /// # Errors
    /// Returns a `ParseError` (wrapped in `Error::Parse`) if the pattern is
    /// malformed.
    pub fn with_resolver(
        pattern: &str,
        resolver: impl SeverityResolver + 'static,
    ) -> Result<Self, Error> {
        let tokens = pattern::parse(pattern)?;
        Ok(Self {
            tokens,
            resolver: Box::new(resolver),
        })
    }

    fn render_placeholder(record: &Record, name: &str, spec: &str) -> Result<String, Error> {
        let value = record.get(name).ok_or_else(|| Error::MissingAttribute {
            name: name.to_string(),
        })?;
        let format_spec = FormatSpec::parse(spec);
        let text = value.to_string_with_precision(format_spec.precision);
        Ok(format_spec.pad(&text))
    }

    fn render_severity(&self, record: &Record, spec: &str) -> String {
        let name = self.resolver.resolve(record.severity_value());
        FormatSpec::parse(spec).pad(&name)
    }

    fn render_timestamp(record: &Record, pattern: &str, spec: &str) -> String {
        let strftime_pattern = if pattern.is_empty() {
            DEFAULT_TIMESTAMP_PATTERN
        } else {
            pattern
        };
        let text = record
            .timestamp_value()
            .as_datetime()
            .format(strftime_pattern)
            .to_string();
        FormatSpec::parse(spec).pad(&text)
    }
}

impl Formatter for StringFormatter {
    fn format(&self, record: &Record) -> Result<String, Error> {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(value) => out.push_str(value),
                Token::Placeholder { name, spec } => {
                    out.push_str(&Self::render_placeholder(record, name, spec)?);
                }
                Token::Severity { spec } => out.push_str(&self.render_severity(record, spec)),
                Token::Timestamp { pattern, spec } => {
                    out.push_str(&Self::render_timestamp(record, pattern, spec));
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn message_placeholder() {
        let fmt = StringFormatter::new("{message}").unwrap();
        let record = Record::new().message("hi");
        assert_eq!(fmt.format(&record).unwrap(), "hi");
    }

    #[test]
    fn severity_and_message() {
        let fmt =
            StringFormatter::with_resolver("[{severity}] {message}", |s: i64| {
                if s == 1 { "INFO".to_string() } else { "UNKNOWN".to_string() }
            })
            .unwrap();
        let record = Record::new().severity(1).message("ok");
        assert_eq!(fmt.format(&record).unwrap(), "[INFO] ok");
    }

    #[test]
    fn escaped_literal_and_attribute() {
        let fmt = StringFormatter::new("{{literal}} {x}").unwrap();
        let record = Record::new().with("x", "v");
        assert_eq!(fmt.format(&record).unwrap(), "{literal} v");
    }

    #[test]
    fn missing_attribute_errors() {
        let fmt = StringFormatter::new("{missing}").unwrap();
        let record = Record::new();
        let err = fmt.format(&record).unwrap_err();
        assert!(matches!(err, Error::MissingAttribute { name } if name == "missing"));
    }

    #[test]
    fn width_and_alignment_applied_to_placeholder() {
        let fmt = StringFormatter::new("[{level:>6}]").unwrap();
        let record = Record::new().with("level", "warn");
        assert_eq!(fmt.format(&record).unwrap(), "[  warn]");
    }

    #[test]
    fn construction_propagates_parse_errors() {
        let err = StringFormatter::new("{").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
