//! Kind checks over JSON values
//!
//! Every built-in rule except `required` starts by checking the kind of the
//! resolved value. These checks also carry the number and key
//! classifications the `number` and `array` rules need.

use std::cmp::Ordering;
use std::fmt;

use serde_json::{Number, Value};

use crate::foundation::ValidationError;

/// Returns the JSON kind name of a value, for error params and logs.
#[must_use]
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A number read from the tree or from an option.
///
/// Two integers compare exactly; any comparison involving a float goes
/// through `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    /// A JSON integer, or a length.
    Int(i128),
    /// A JSON float or a numeric string.
    Float(f64),
}

impl Numeric {
    /// Returns the value as `f64`, rounding integers beyond 2^53.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }
}

impl From<&Number> for Numeric {
    fn from(n: &Number) -> Self {
        n.as_i64()
            .map(|n| Self::Int(n.into()))
            .or_else(|| n.as_u64().map(|n| Self::Int(n.into())))
            .unwrap_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)))
    }
}

impl From<usize> for Numeric {
    fn from(len: usize) -> Self {
        Self::Int(len as i128)
    }
}

impl From<f64> for Numeric {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

/// Reads a value as a number.
///
/// JSON numbers and numeric strings (`"42"`, `" 1.5"`, `"1e3"`) both count.
/// Numeric strings always read as floats. Non-finite spellings such as
/// `"inf"` or `"NaN"` do not count.
#[must_use]
pub fn numeric_value(value: &Value) -> Option<Numeric> {
    match value {
        Value::Number(n) => Some(Numeric::from(n)),
        Value::String(s) => s
            .trim_start()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Numeric::Float),
        _ => None,
    }
}

/// Returns true if a mapping key is a canonical integer (`"0"`, `"17"`, `"-3"`).
///
/// Such keys address positions rather than names, so a mapping made only of
/// them is not associative.
#[must_use]
pub fn is_integer_key(key: &str) -> bool {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let canonical = match digits.as_bytes() {
        [b'0'] => key == "0",
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
        [] => false,
    };
    canonical && key.parse::<i64>().is_ok()
}

/// Returns the number of elements of a sequence or mapping.
#[must_use]
pub fn collection_len(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

crate::validator! {
    /// Validates that a value is a string.
    pub IsString for Value;
    rule(input) { input.is_string() }
    error(input) { ValidationError::type_mismatch("string", kind_name(input)) }
    fn is_string();
}

crate::validator! {
    /// Validates that a value is numeric (a number or a numeric string).
    pub IsNumeric for Value;
    rule(input) { numeric_value(input).is_some() }
    error(input) { ValidationError::type_mismatch("numeric", kind_name(input)) }
    fn is_numeric();
}

crate::validator! {
    /// Validates that a value is a number stored as floating point.
    pub IsFloat for Value;
    rule(input) { input.is_f64() }
    error(input) { ValidationError::type_mismatch("float", kind_name(input)) }
    fn is_float();
}

crate::validator! {
    /// Validates that a value is a number stored as an integer.
    pub IsInteger for Value;
    rule(input) { input.is_i64() || input.is_u64() }
    error(input) { ValidationError::type_mismatch("integer", kind_name(input)) }
    fn is_integer();
}

crate::validator! {
    /// Validates that a value is a boolean.
    pub IsBool for Value;
    rule(input) { input.is_boolean() }
    error(input) { ValidationError::type_mismatch("boolean", kind_name(input)) }
    fn is_bool();
}

crate::validator! {
    /// Validates that a value is a sequence or a mapping.
    pub IsCollection for Value;
    rule(input) { collection_len(input).is_some() }
    error(input) { ValidationError::type_mismatch("array", kind_name(input)) }
    fn is_collection();
}

crate::validator! {
    /// Validates that a collection has at least one non-integer key.
    ///
    /// Sequences and empty mappings never do.
    pub IsAssoc for Value;
    rule(input) {
        input
            .as_object()
            .is_some_and(|map| map.keys().any(|key| !is_integer_key(key)))
    }
    error(input) { ValidationError::new("assoc", "Collection must have named keys") }
    fn is_assoc();
}
