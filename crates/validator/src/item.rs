//! Validation items
//!
//! An item binds one rule to one or more field paths, with options:
//!
//! ```json
//! ["user.name", "string", {"notEmpty": true}]
//! [["email", "phone"], "required"]
//! ```
//!
//! Items are checked for shape when added, so a malformed one never
//! reaches [`Validator::run`](crate::validator::Validator::run).

use serde_json::Value;

use crate::error::{ValidatorError, ValidatorResult};
use crate::options::RuleOptions;
use crate::validators::kind_name;

/// The field path(s) an item applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// A single dotted path.
    One(String),
    /// Several paths, checked in order against the same rule.
    Many(Vec<String>),
}

impl FieldSpec {
    /// Iterates over the paths in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let paths: &[String] = match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths,
        };
        paths.iter().map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::One(path) => path.is_empty(),
            Self::Many(paths) => paths.is_empty() || paths.iter().any(String::is_empty),
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(path: &str) -> Self {
        Self::One(path.to_owned())
    }
}

impl From<String> for FieldSpec {
    fn from(path: String) -> Self {
        Self::One(path)
    }
}

impl<S: Into<String>> From<Vec<S>> for FieldSpec {
    fn from(paths: Vec<S>) -> Self {
        Self::Many(paths.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldSpec {
    fn from(paths: [&str; N]) -> Self {
        Self::Many(paths.iter().map(|p| (*p).to_owned()).collect())
    }
}

/// One `(fields, rule, options)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationItem {
    /// Paths the rule is applied to.
    pub fields: FieldSpec,
    /// Registered rule name.
    pub rule: String,
    /// Rule options.
    pub options: RuleOptions,
}

impl ValidationItem {
    /// Creates an item without options.
    pub fn new(fields: impl Into<FieldSpec>, rule: impl Into<String>) -> Self {
        Self {
            fields: fields.into(),
            rule: rule.into(),
            options: RuleOptions::new(),
        }
    }

    /// Sets the options.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidItemSpec`] if `options` is not a mapping or `null`.
    pub fn with_options(mut self, options: Value) -> ValidatorResult<Self> {
        self.options = RuleOptions::from_value(options)?;
        Ok(self)
    }

    /// Checks the item's shape.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidItemSpec`] for an empty field set, an empty
    /// path or an empty rule name.
    pub fn check_shape(&self) -> ValidatorResult<()> {
        if self.fields.is_empty() {
            return Err(ValidatorError::invalid_item("empty field set"));
        }
        if self.rule.is_empty() {
            return Err(ValidatorError::invalid_item("empty rule name"));
        }
        Ok(())
    }
}

impl TryFrom<&Value> for ValidationItem {
    type Error = ValidatorError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        let Some(parts) = raw.as_array() else {
            return Err(ValidatorError::invalid_item(format!(
                "item must be an array, got {}",
                kind_name(raw)
            )));
        };
        let (fields, rule, options) = match parts.as_slice() {
            [fields, rule] => (fields, rule, &Value::Null),
            [fields, rule, options] => (fields, rule, options),
            _ => {
                return Err(ValidatorError::invalid_item(format!(
                    "item must have 2 or 3 elements, got {}",
                    parts.len()
                )));
            }
        };

        let fields = match fields {
            Value::String(path) => FieldSpec::One(path.clone()),
            Value::Array(paths) => FieldSpec::Many(
                paths
                    .iter()
                    .map(|path| {
                        path.as_str().map(str::to_owned).ok_or_else(|| {
                            ValidatorError::invalid_item("field paths must be strings")
                        })
                    })
                    .collect::<ValidatorResult<_>>()?,
            ),
            other => {
                return Err(ValidatorError::invalid_item(format!(
                    "field spec must be a string or an array of strings, got {}",
                    kind_name(other)
                )));
            }
        };

        let Some(rule) = rule.as_str() else {
            return Err(ValidatorError::invalid_item(format!(
                "rule name must be a string, got {}",
                kind_name(rule)
            )));
        };

        let item = Self {
            fields,
            rule: rule.to_owned(),
            options: RuleOptions::from_value(options.clone())?,
        };
        item.check_shape()?;
        Ok(item)
    }
}

impl TryFrom<Value> for ValidationItem {
    type Error = ValidatorError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Self::try_from(&raw)
    }
}
