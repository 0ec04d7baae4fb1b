//! Field Values
//!
//! Raw values as they come out of form extraction, plus the coercions the
//! checks rely on.

use serde::Deserialize;
use std::fmt;

/// A raw field value
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Explicit `null` or a field missing from the data
    #[default]
    Null,
}

impl FieldValue {
    /// Whether the value counts as supplied.
    ///
    /// Every check except `required` passes when this returns `false`.
    /// `null`, `false`, empty text, zero and NaN are not present; the text
    /// `"0"` is.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric coercion of the whole value, `None` when it is not a number.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if !n.is_nan() => Some(*n),
            FieldValue::Text(s) => parse_number(s),
            _ => None,
        }
    }

    /// Leading integer prefix of the value (`"12px"` -> 12).
    pub fn to_integer_prefix(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            FieldValue::Text(s) => parse_integer_prefix(s),
            _ => None,
        }
    }

    /// Length in characters, only text has one.
    pub fn char_len(&self) -> Option<usize> {
        self.as_text().map(|s| s.chars().count())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Parse a finite decimal literal, surrounding whitespace allowed.
///
/// Rejects the `inf`/`nan` spellings `f64::from_str` would otherwise accept.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_integer_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}
