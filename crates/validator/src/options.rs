//! Rule options
//!
//! Each validation item carries a mapping of option name to constraint
//! value. An option counts as set when its key exists and does not hold
//! `null`. Nested groups (`length`, `value`) hold the bounded checks:
//!
//! ```json
//! {"notEmpty": true, "length": {"min": 3, "max": 5}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ValidatorError, ValidatorResult};
use crate::validators::{Numeric, numeric_value};

/// A numeric bound read from a `min`/`max`/`equal` option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// A usable bound. Booleans read as `0`/`1`.
    Number(Numeric),
    /// A value no number can be compared against; the check fails.
    Invalid,
}

/// The option mapping of one validation item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleOptions {
    map: Map<String, Value>,
}

impl RuleOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a JSON value.
    ///
    /// `null` and an empty sequence mean no options.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidItemSpec`] if the value is not a mapping.
    pub fn from_value(value: Value) -> ValidatorResult<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            Value::Null => Ok(Self::default()),
            Value::Array(items) if items.is_empty() => Ok(Self::default()),
            other => Err(ValidatorError::invalid_item(format!(
                "options must be a mapping, got {}",
                crate::validators::kind_name(&other)
            ))),
        }
    }

    /// Returns the option value, or `None` if unset or `null`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// Returns true if the option is set.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Reads a flag option by its truthiness.
    ///
    /// `false`, `0`, `""`, `"0"` and empty collections read as `false`.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).map(truthy)
    }

    /// Reads `group.key` as a numeric bound.
    ///
    /// Returns `None` when the group is absent or not a mapping, or when the
    /// key is unset within it.
    #[must_use]
    pub fn bound(&self, group: &str, key: &str) -> Option<Bound> {
        let value = self
            .get(group)?
            .as_object()?
            .get(key)
            .filter(|v| !v.is_null())?;

        Some(match value {
            Value::Bool(b) => Bound::Number(Numeric::Int(i128::from(*b))),
            other => numeric_value(other).map_or(Bound::Invalid, Bound::Number),
        })
    }

    /// Top-level option names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Returns true if there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of top-level options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl From<Map<String, Value>> for RuleOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

impl TryFrom<Value> for RuleOptions {
    type Error = ValidatorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn options(value: Value) -> RuleOptions {
        RuleOptions::from_value(value).unwrap()
    }

    #[test]
    fn null_means_empty() {
        assert!(options(Value::Null).is_empty());
    }

    #[test]
    fn empty_sequence_means_empty() {
        assert!(options(json!([])).is_empty());
    }

    #[test]
    fn scalar_and_filled_sequence_are_rejected() {
        for raw in [json!(5), json!(["min", 3])] {
            assert!(matches!(
                RuleOptions::from_value(raw),
                Err(ValidatorError::InvalidItemSpec(_))
            ));
        }
    }

    #[test]
    fn null_option_is_unset() {
        let opts = options(json!({"notEmpty": null}));
        assert!(!opts.is_set("notEmpty"));
        assert_eq!(opts.flag("notEmpty"), None);
    }

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(false), false)]
    #[case(json!(1), true)]
    #[case(json!(0), false)]
    #[case(json!("yes"), true)]
    #[case(json!("0"), false)]
    #[case(json!(""), false)]
    #[case(json!([]), false)]
    fn flag_truthiness(#[case] raw: Value, #[case] expected: bool) {
        let opts = options(json!({ "isTrue": raw }));
        assert_eq!(opts.flag("isTrue"), Some(expected));
    }

    #[test]
    fn bound_reads_nested_group() {
        let opts = options(json!({"length": {"min": 3, "max": "5"}}));
        assert_eq!(opts.bound("length", "min"), Some(Bound::Number(Numeric::Int(3))));
        assert_eq!(opts.bound("length", "max"), Some(Bound::Number(Numeric::Float(5.0))));
        assert_eq!(opts.bound("length", "equal"), None);
    }

    #[test]
    fn bound_coerces_booleans() {
        let opts = options(json!({"value": {"min": false, "max": true}}));
        assert_eq!(opts.bound("value", "min"), Some(Bound::Number(Numeric::Int(0))));
        assert_eq!(opts.bound("value", "max"), Some(Bound::Number(Numeric::Int(1))));
    }

    #[test]
    fn bound_marks_garbage_invalid() {
        let opts = options(json!({"value": {"min": "many"}}));
        assert_eq!(opts.bound("value", "min"), Some(Bound::Invalid));
    }

    #[test]
    fn non_mapping_group_has_no_bounds() {
        let opts = options(json!({"length": 5}));
        assert_eq!(opts.bound("length", "min"), None);
    }

    #[test]
    fn keys_keep_declaration_order() {
        let opts = options(json!({"pattern": "x", "notEmpty": true, "length": {}}));
        assert_eq!(opts.keys().collect::<Vec<_>>(), ["pattern", "notEmpty", "length"]);
    }
}
