//! Field value types and lenient numeric parsing

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A polymorphic field value exposed by records for filtering and sorting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of the value.
    ///
    /// Integers and floats convert directly. Strings are not parsed here; use
    /// [`parse_money`] for currency-formatted text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Parse a currency-formatted amount such as `"€18M"` or `"$2.5M"`.
///
/// Every character other than ASCII digits and `.` is stripped before parsing,
/// so magnitude suffixes are dropped rather than scaled. Anything that does not
/// parse afterwards (`"N/A"`, `""`, `"1.2.3"`) yields `0.0`.
pub fn parse_money(raw: &str) -> f64 {
    static NON_NUMERIC: OnceLock<Regex> = OnceLock::new();
    let regex = NON_NUMERIC.get_or_init(|| Regex::new(r"[^0-9.]").unwrap());
    let digits = regex.replace_all(raw, "");
    digits.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Parse a user-typed numeric bound.
///
/// Surrounding whitespace is ignored. Empty or partially typed input
/// (`""`, `"-"`, `"2a"`) returns `None`, meaning "no constraint".
pub fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
