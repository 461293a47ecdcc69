use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single allowed (or active) modifier value.
///
/// Comparison is strict: a string never equals a number or a boolean, even when they render
/// the same. Integers and floats compare numerically, so `Int(1) == Float(1.0)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModifierValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ModifierValue {
    /// Returns the string payload, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if `self` is strictly equal to any entry of `allowed`.
    #[must_use]
    pub fn is_one_of(&self, allowed: &[Self]) -> bool {
        allowed.iter().any(|candidate| candidate == self)
    }
}

impl PartialEq for ModifierValue {
    #[allow(clippy::cast_precision_loss)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => (*a as f64) == *b,
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => false,
        }
    }
}

/// Renders the value the way it appears inside a class token.
impl fmt::Display for ModifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_negative() { "-Infinity" } else { "Infinity" })
            },
            // -0 renders as 0
            Self::Float(x) if *x == 0.0 => f.write_str("0"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Loose parsing for text input: `true`/`false`, then integer, then float, else string.
impl FromStr for ModifierValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = match s {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => s
                .parse::<i64>()
                .map(Self::Int)
                .or_else(|_| s.parse::<f64>().map(Self::Float))
                .unwrap_or_else(|_| Self::Str(s.to_owned())),
        };
        Ok(value)
    }
}

impl From<&str> for ModifierValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ModifierValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ModifierValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ModifierValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ModifierValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ModifierValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ModifierValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
