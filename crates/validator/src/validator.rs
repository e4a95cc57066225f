//! The validator: a data tree, a rule registry and an ordered item list
//!
//! ```
//! use nadir_validator::Validator;
//! use serde_json::json;
//!
//! let mut validator = Validator::new(json!({"user": {"name": "", "age": 17}}));
//! validator
//!     .add_raw_item(&json!(["user.name", "string", {"notEmpty": true}]))?
//!     .add_raw_item(&json!(["user.age", "number", {"value": {"min": 18}}]))?
//!     .add_raw_item(&json!(["user.email", "required"]))?;
//!
//! validator.run()?;
//! assert!(!validator.is_valid()?);
//! assert_eq!(validator.errors()?.len(), 3);
//! # Ok::<(), nadir_validator::ValidatorError>(())
//! ```
//!
//! # Lifecycle
//!
//! `run` evaluates the items once. Later calls return the recorded outcome,
//! and items added after the run are not evaluated. A run that meets an
//! unregistered rule name is aborted: it keeps no field messages and every
//! later `run` reports the same rule.

use serde_json::Value;

use crate::error::{ValidatorError, ValidatorResult};
use crate::item::ValidationItem;
use crate::registry::RuleRegistry;
use crate::rule::{Rule, RuleMessage};

/// Message recorded for a tree that is neither a mapping nor a sequence.
pub const INVALID_DATA_SET: &str = "Invalid data set format.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Pending,
    Finished(Vec<String>),
    Aborted(String),
}

/// Validates one data tree against a list of items.
#[derive(Debug, Clone)]
pub struct Validator {
    tree: Value,
    registry: RuleRegistry,
    items: Vec<ValidationItem>,
    outcome: Outcome,
}

impl Validator {
    /// Binds `tree` and registers the built-in rules.
    ///
    /// A tree that is not a mapping or sequence yields a validator that has
    /// already run and holds the single error [`INVALID_DATA_SET`].
    #[must_use]
    pub fn new(tree: Value) -> Self {
        let outcome = if tree.is_object() || tree.is_array() {
            Outcome::Pending
        } else {
            tracing::debug!(
                kind = crate::validators::kind_name(&tree),
                "data set is not a container"
            );
            Outcome::Finished(vec![INVALID_DATA_SET.to_owned()])
        };

        Self {
            tree,
            registry: RuleRegistry::with_builtins(),
            items: Vec::new(),
            outcome,
        }
    }

    /// The bound data tree.
    #[must_use]
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    /// The rule registry.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ValidationItem] {
        &self.items
    }

    /// Appends an item.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidItemSpec`] if the item has an empty field
    /// set, an empty path or an empty rule name.
    pub fn add_item(&mut self, item: ValidationItem) -> ValidatorResult<&mut Self> {
        item.check_shape()?;
        self.items.push(item);
        Ok(self)
    }

    /// Appends every item, stopping at the first malformed one.
    ///
    /// # Errors
    ///
    /// See [`add_item`](Self::add_item).
    pub fn set_items<I>(&mut self, items: I) -> ValidatorResult<&mut Self>
    where
        I: IntoIterator<Item = ValidationItem>,
    {
        for item in items {
            self.add_item(item)?;
        }
        Ok(self)
    }

    /// Appends an item given as `[fields, rule, options?]`.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidItemSpec`] if the triple is malformed.
    pub fn add_raw_item(&mut self, raw: &Value) -> ValidatorResult<&mut Self> {
        self.add_item(ValidationItem::try_from(raw)?)
    }

    /// Appends every raw item of a JSON array.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidItemSpec`] if `raw` is not an array or one
    /// of its items is malformed.
    pub fn set_raw_items(&mut self, raw: &Value) -> ValidatorResult<&mut Self> {
        let Some(items) = raw.as_array() else {
            return Err(ValidatorError::invalid_item(format!(
                "item list must be an array, got {}",
                crate::validators::kind_name(raw)
            )));
        };
        for item in items {
            self.add_raw_item(item)?;
        }
        Ok(self)
    }

    /// Registers a rule, replacing any rule of the same name.
    pub fn add_rule<P>(
        &mut self,
        name: impl Into<String>,
        predicate: P,
        message: impl Into<RuleMessage>,
    ) -> &mut Self
    where
        P: Fn(&Value, &str, &crate::options::RuleOptions) -> bool + Send + Sync + 'static,
    {
        self.registry
            .register(name, Rule::new(predicate).with_message(message));
        self
    }

    /// Registers a prebuilt rule.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) -> &mut Self {
        self.registry.register(name, rule);
        self
    }

    /// Evaluates every item against the tree.
    ///
    /// Field messages are appended in failure order; nothing stops the run
    /// early except an unknown rule.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::UnknownRule`] if an item names an unregistered rule.
    pub fn run(&mut self) -> ValidatorResult<()> {
        match &self.outcome {
            Outcome::Finished(_) => return Ok(()),
            Outcome::Aborted(rule) => return Err(ValidatorError::UnknownRule(rule.clone())),
            Outcome::Pending => {}
        }

        tracing::debug!(items = self.items.len(), "validation started");

        let mut errors = Vec::new();
        for item in &self.items {
            let Some(rule) = self.registry.get(&item.rule) else {
                tracing::warn!(rule = %item.rule, "validation aborted by undefined rule");
                self.outcome = Outcome::Aborted(item.rule.clone());
                return Err(ValidatorError::UnknownRule(item.rule.clone()));
            };

            for field in item.fields.iter() {
                if !rule.check(&self.tree, field, &item.options) {
                    tracing::trace!(rule = %item.rule, field, "field failed");
                    errors.push(rule.message(field, &item.options));
                }
            }
        }

        tracing::debug!(errors = errors.len(), "validation finished");
        self.outcome = Outcome::Finished(errors);
        Ok(())
    }

    /// Returns true if the run recorded no error.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::NotYetRun`] before [`run`](Self::run),
    /// [`ValidatorError::RunAborted`] after an aborted run.
    pub fn is_valid(&self) -> ValidatorResult<bool> {
        self.errors().map(<[String]>::is_empty)
    }

    /// The recorded messages, in failure order.
    ///
    /// # Errors
    ///
    /// Same as [`is_valid`](Self::is_valid).
    pub fn errors(&self) -> ValidatorResult<&[String]> {
        match &self.outcome {
            Outcome::Finished(errors) => Ok(errors),
            Outcome::Pending => Err(ValidatorError::NotYetRun),
            Outcome::Aborted(rule) => Err(ValidatorError::RunAborted { rule: rule.clone() }),
        }
    }

    /// Takes the recorded messages.
    ///
    /// # Errors
    ///
    /// Same as [`is_valid`](Self::is_valid).
    pub fn into_errors(self) -> ValidatorResult<Vec<String>> {
        match self.outcome {
            Outcome::Finished(errors) => Ok(errors),
            Outcome::Pending => Err(ValidatorError::NotYetRun),
            Outcome::Aborted(rule) => Err(ValidatorError::RunAborted { rule }),
        }
    }
}
