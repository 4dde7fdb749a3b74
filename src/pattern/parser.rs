//! Single-pass state-machine tokenizer. No I/O, no lookahead beyond what
//! `starts_with` needs for the `{{`/`}}` escape rule.

use super::Token;
use crate::error::{ErrorKind, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Whatever,
    Literal,
    Placeholder,
    Broken,
}

/// Tokenizes a pattern one token per `next()` call (via `Iterator`). After
/// the first error the parser is permanently broken: every later call
/// returns `BrokenParser` at the same position instead of resuming.
#[derive(Debug, Clone)]
pub struct Parser {
    pattern: String,
    pos: usize,
    state: State,
}

impl Parser {
    /// Takes ownership of `pattern` — the parser never needs to re-read it
    /// from the caller once constructed.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            pos: 0,
            state: State::Whatever,
        }
    }

    fn fail(&mut self, kind: ErrorKind, position: usize) -> ParseError {
        self.state = State::Broken;
        ParseError {
            kind,
            position,
            pattern: self.pattern.clone(),
        }
    }

    fn rest(&self) -> &str {
        &self.pattern[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    fn parse_literal(&mut self) -> Result<Token, ParseError> {
        let mut value = String::new();
        loop {
            if self.pos >= self.pattern.len() {
                return Ok(Token::Literal(value));
            } else if self.starts_with("{{") {
                self.bump();
                self.bump();
                value.push('{');
            } else if self.starts_with("}}") {
                self.bump();
                self.bump();
                value.push('}');
            } else if self.starts_with("{") {
                self.bump();
                self.state = State::Placeholder;
                return Ok(Token::Literal(value));
            } else if self.starts_with("}") {
                let at = self.pos;
                return Err(self.fail(ErrorKind::Illformed, at));
            } else {
                let ch = self.bump().expect("pos < pattern.len() was just checked");
                value.push(ch);
            }
        }
    }

    /// Collects spec text up to the closing `}`. `spec` is seeded by the
    /// caller — it already contains the leading `:` when one was consumed,
    /// per the token model's "spec includes the leading colon" rule.
    fn parse_spec(&mut self, mut spec: String) -> Result<String, ParseError> {
        loop {
            match self.peek() {
                None => {
                    let at = self.pos;
                    return Err(self.fail(ErrorKind::Illformed, at));
                }
                Some('}') => {
                    self.bump();
                    self.state = State::Whatever;
                    return Ok(spec);
                }
                Some(ch) => {
                    spec.push(ch);
                    self.bump();
                }
            }
        }
    }

    /// `{timestamp:{%Y-%m-%d}:spec}` — an optional brace-delimited
    /// sub-pattern immediately after the colon. Absent sub-pattern braces
    /// leave this `None` and spec collection proceeds as normal.
    fn parse_timestamp_pattern(&mut self) -> Option<String> {
        if !self.starts_with("{") {
            return None;
        }
        self.bump();
        let mut pattern = String::new();
        loop {
            match self.peek() {
                None => return Some(pattern),
                Some('}') => {
                    self.bump();
                    return Some(pattern);
                }
                Some(ch) => {
                    pattern.push(ch);
                    self.bump();
                }
            }
        }
    }

    fn parse_placeholder(&mut self) -> Result<Token, ParseError> {
        let mut name = String::new();
        loop {
            match self.peek() {
                None => {
                    let at = self.pos;
                    return Err(self.fail(ErrorKind::Illformed, at));
                }
                Some(ch) if ch.is_ascii_alphanumeric() || ch == '_' => {
                    name.push(ch);
                    self.bump();
                }
                Some(':') => {
                    self.bump();
                    return self.parse_typed(name);
                }
                Some('}') => {
                    self.bump();
                    self.state = State::Whatever;
                    return Ok(Self::bare_token(name));
                }
                Some(_) => {
                    let at = self.pos;
                    return Err(self.fail(ErrorKind::InvalidPlaceholder, at));
                }
            }
        }
    }

    /// `{severity}` / `{timestamp}` with no colon still lift to their typed
    /// variant with an empty spec — see the Open Question resolution on bare
    /// reserved-name placeholders.
    fn bare_token(name: String) -> Token {
        match name.as_str() {
            "severity" => Token::Severity { spec: String::new() },
            "timestamp" => Token::Timestamp {
                pattern: String::new(),
                spec: String::new(),
            },
            _ => Token::Placeholder {
                name,
                spec: String::new(),
            },
        }
    }

    fn parse_typed(&mut self, name: String) -> Result<Token, ParseError> {
        match name.as_str() {
            "severity" => {
                let spec = self.parse_spec(":".to_string())?;
                Ok(Token::Severity { spec })
            }
            "timestamp" => match self.parse_timestamp_pattern() {
                // A sub-pattern consumes up to its own closing `}`; the `:`
                // separating it from a trailing spec (if any) is still
                // unconsumed and must not be double-counted with the seed.
                Some(pattern) => {
                    let seed = if self.peek() == Some(':') {
                        self.bump();
                        ":".to_string()
                    } else {
                        String::new()
                    };
                    let spec = self.parse_spec(seed)?;
                    Ok(Token::Timestamp { pattern, spec })
                }
                None => {
                    let spec = self.parse_spec(":".to_string())?;
                    Ok(Token::Timestamp {
                        pattern: String::new(),
                        spec,
                    })
                }
            },
            _ => {
                let spec = self.parse_spec(":".to_string())?;
                Ok(Token::Placeholder { name, spec })
            }
        }
    }
}

impl Iterator for Parser {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Broken => {
                let at = self.pos;
                Some(Err(self.fail(ErrorKind::BrokenParser, at)))
            }
            State::Whatever => {
                if self.pos >= self.pattern.len() {
                    None
                } else if self.starts_with("{") && !self.starts_with("{{") {
                    self.bump();
                    self.state = State::Placeholder;
                    self.next()
                } else {
                    self.state = State::Literal;
                    self.next()
                }
            }
            State::Literal => Some(self.parse_literal()),
            State::Placeholder => Some(self.parse_placeholder()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pattern: &str) -> Result<Vec<Token>, ParseError> {
        Parser::new(pattern).collect()
    }

    #[test]
    fn plain_literal() {
        assert_eq!(tokens("hi").unwrap(), vec![Token::Literal("hi".into())]);
    }

    #[test]
    fn empty_pattern_yields_no_tokens() {
        assert_eq!(tokens("").unwrap(), vec![]);
    }

    #[test]
    fn escaped_braces_collapse() {
        assert_eq!(
            tokens("{{literal}} {x}").unwrap(),
            vec![
                Token::Literal("{literal} ".into()),
                Token::Placeholder {
                    name: "x".into(),
                    spec: String::new()
                },
            ]
        );
    }

    #[test]
    fn generic_placeholder_with_spec() {
        assert_eq!(
            tokens("{x:>5}").unwrap(),
            vec![Token::Placeholder {
                name: "x".into(),
                spec: ":>5".into(),
            }]
        );
    }

    #[test]
    fn bare_severity_and_timestamp_are_legal() {
        assert_eq!(
            tokens("{severity} {timestamp}").unwrap(),
            vec![
                Token::Severity {
                    spec: String::new()
                },
                Token::Literal(" ".into()),
                Token::Timestamp {
                    pattern: String::new(),
                    spec: String::new()
                },
            ]
        );
    }

    #[test]
    fn timestamp_with_subpattern_and_spec() {
        assert_eq!(
            tokens("{timestamp:{%Y-%m-%d}:<20}").unwrap(),
            vec![Token::Timestamp {
                pattern: "%Y-%m-%d".into(),
                spec: ":<20".into(),
            }]
        );
    }

    #[test]
    fn timestamp_without_subpattern_keeps_spec() {
        assert_eq!(
            tokens("{timestamp:<20}").unwrap(),
            vec![Token::Timestamp {
                pattern: String::new(),
                spec: ":<20".into(),
            }]
        );
    }

    #[test]
    fn bare_closing_brace_in_literal_is_illformed() {
        let err = tokens("a}b").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Illformed);
        assert_eq!(err.position, 1);
    }

    #[test]
    fn unterminated_placeholder_is_illformed_at_eof() {
        let err = tokens("{").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Illformed);
        assert_eq!(err.position, 1);
    }

    #[test]
    fn invalid_char_in_placeholder_name() {
        let err = tokens("{na-me}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidPlaceholder);
        assert_eq!(err.position, 3);
    }

    #[test]
    fn parser_stays_broken_after_first_error() {
        let mut parser = Parser::new("{");
        assert!(parser.next().unwrap().is_err());
        let second = parser.next().unwrap().unwrap_err();
        assert_eq!(second.kind, ErrorKind::BrokenParser);
    }

    #[test]
    fn byte_positions_count_utf8_bytes_not_chars() {
        let err = tokens("héllo}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Illformed);
        // "h" (1) + "é" (2 bytes in UTF-8) + "llo" (3) = 6
        assert_eq!(err.position, 6);
    }
}
