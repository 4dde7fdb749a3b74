//! Typed attribute values carried by a `Record`.

use std::fmt;

/// A single attribute's value. Kept as a small closed set (rather than an
/// open `Box<dyn Any>`) so both formatters can match exhaustively and the
/// JSON formatter can preserve semantic type without guessing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
    Bool(bool),
}

impl Value {
    /// Precision, when present in a format spec, only has meaning for floats
    /// and strings — everything else renders via its default textual form.
    #[must_use]
    pub fn to_string_with_precision(&self, precision: Option<usize>) -> String {
        match (self, precision) {
            (Self::Float(v), Some(p)) => format!("{v:.p$}"),
            (Self::String(s), Some(p)) => s.chars().take(p).collect(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Signed(v) => Self::from(v),
            Value::Unsigned(v) => Self::from(v),
            Value::Float(v) => serde_json::Number::from_f64(v).map_or(Self::Null, Self::Number),
            Value::String(v) => Self::String(v),
            Value::Bool(v) => Self::Bool(v),
        }
    }
}

macro_rules! impl_from_int {
    ($($signed:ty),* ; $($unsigned:ty),*) => {
        $(impl From<$signed> for Value {
            fn from(v: $signed) -> Self {
                Self::Signed(i64::from(v))
            }
        })*
        $(impl From<$unsigned> for Value {
            fn from(v: $unsigned) -> Self {
                Self::Unsigned(u64::from(v))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64; u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}
