//! Severity is carried on a `Record` as an opaque integer; a `SeverityResolver`
//! turns it into the name the formatter actually emits.

use std::fmt;
use std::str::FromStr;

/// Conventional five-level severity scale, provided as a default so most
/// callers don't need to write their own resolver.
///
/// Derives `Ord` so callers can gate on a minimum severity the same way a
/// logger frontend gates on level before ever touching the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation that would be too noisy outside of development.
    Trace = 0,
    /// Startup, teardown, and state-change details useful for diagnosing issues.
    Debug = 1,
    /// Normal operational milestones — connection established, config loaded, etc.
    #[default]
    Info = 2,
    /// Non-fatal anomalies that may need attention (deprecated features, retries).
    Warn = 3,
    /// Unrecoverable failures that prevent the operation from completing.
    Error = 4,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Maps a raw record severity onto the five-level scale, falling back to
    /// `Error` above the top and `Trace` below the bottom rather than panicking
    /// on out-of-range input from a caller using a wider custom scale.
    #[must_use]
    pub const fn from_raw(value: i64) -> Self {
        match value {
            i64::MIN..=0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// The formatter treats severity as an opaque integer; resolving it to a
/// display name is the caller's concern, not the parser's or formatter's.
pub trait SeverityResolver: Send + Sync {
    /// Resolves a raw record severity to the name the string formatter emits.
    fn resolve(&self, severity: i64) -> String;
}

/// Resolver backed by the conventional five-level scale — the sane default
/// for callers who don't need a custom severity scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelResolver;

impl SeverityResolver for LevelResolver {
    fn resolve(&self, severity: i64) -> String {
        Level::from_raw(severity).as_str().to_string()
    }
}

/// Adapts any `Fn(i64) -> String` closure into a `SeverityResolver`, for
/// callers with a one-off mapping not worth naming a type for.
impl<F> SeverityResolver for F
where
    F: Fn(i64) -> String + Send + Sync,
{
    fn resolve(&self, severity: i64) -> String {
        self(severity)
    }
}
