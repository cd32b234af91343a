//! Loosely typed field values
//!
//! Catalog files are hand-written JSON, so `level` and `credits` show up as
//! numbers in one entry and strings in the next. [`FieldValue`] keeps the
//! value as given and implements the coercive comparison the filters need.
//! Arrays and objects are kept too, as the text JavaScript's `String()` would
//! give them (`[1, 2]` is `"1,2"`, `{}` is `"[object Object]"`).

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

const OBJECT_TEXT: &str = "[object Object]";

/// A field value as it appeared in the catalog file
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A JSON string (possibly empty)
    Text(String),
    /// A JSON number
    Number(f64),
    /// A JSON boolean
    Bool(bool),
    /// A JSON array or object, held as its string form
    ///
    /// Every occurrence is its own value, so two equal-looking arrays are
    /// still distinct filter options.
    Composite(String),
}

impl FieldValue {
    /// Create a text value
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Coercive equality against a selected option string
    ///
    /// Text compares exactly. Numbers and booleans compare numerically after
    /// converting `other` with [`string_to_number`], so `Number(3.0)` equals
    /// `"3"`, `" 3 "` and `"0x3"`. Arrays and objects compare by their
    /// string form, so `[1]` equals `"1"`.
    #[must_use]
    pub fn loosely_equals(&self, other: &str) -> bool {
        match self {
            Self::Text(text) | Self::Composite(text) => text == other,
            Self::Number(n) => *n == string_to_number(other),
            Self::Bool(b) => f64::from(u8::from(*b)) == string_to_number(other),
        }
    }

    /// Convert a raw JSON value
    ///
    /// Returns `None` only for `null`.
    #[must_use]
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s)),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::Bool(b) => Some(Self::Bool(b)),
            composite @ (Value::Array(_) | Value::Object(_)) => {
                Some(Self::Composite(json_to_string(&composite)))
            }
        }
    }

    /// Same-value equality, used to deduplicate filter options
    ///
    /// `3` and `"3"` differ, `0` equals `-0`, `NaN` equals itself, and no
    /// array or object equals another value.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

/// Render a JSON value the way JavaScript's `String()` does
///
/// Arrays join their elements with `,` (with `null` elements empty) and
/// objects become `[object Object]`.
#[must_use]
fn json_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), number_to_string),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => json_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => OBJECT_TEXT.to_string(),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Composite(text) => f.write_str(text),
            Self::Number(n) => f.write_str(&number_to_string(*n)),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Deserialize an optional level/credits value
///
/// Only `null` (or an absent key, via `#[serde(default)]`) produces `None`;
/// `0`, `""` and `[]` are kept.
pub(crate) fn nullable_value<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(FieldValue::from_json(value))
}

/// Deserialize an optional text field, treating falsy values as absent
///
/// `null`, `""`, `0` and `false` give `None`. Everything else is truthy and is
/// kept as its string form, including empty arrays.
pub(crate) fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => n
            .as_f64()
            .filter(|n| *n != 0.0 && !n.is_nan())
            .map(number_to_string),
        Value::Bool(true) => Some("true".to_string()),
        composite @ (Value::Array(_) | Value::Object(_)) => Some(json_to_string(&composite)),
        Value::Null | Value::String(_) | Value::Bool(false) => None,
    })
}

/// Convert a string to a number the way a JavaScript `Number(s)` call does
///
/// Surrounding whitespace is ignored, the empty string is `0`, `0x`/`0o`/`0b`
/// prefixes select a radix and `Infinity` is accepted. Anything else that is
/// not a plain decimal literal is `NaN`.
#[must_use]
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
        })
        .unwrap_or(f64::NAN);
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan"; JavaScript does not
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// Format a number the way JavaScript's `String(n)` does
///
/// Integers print without a fractional part, and magnitudes outside
/// `[1e-6, 1e21)` switch to exponent form (`1e+21`).
#[must_use]
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }

    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
