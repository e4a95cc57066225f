//! Rules: a named predicate plus the message produced when it fails
//!
//! Predicates are pure functions of the tree, the field path and the
//! options. They never capture the tree, so one registry can check any
//! number of trees.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::options::RuleOptions;

/// Signature of a rule predicate: `(tree, field_path, options) -> valid`.
pub type Predicate = Arc<dyn Fn(&Value, &str, &RuleOptions) -> bool + Send + Sync>;

/// Signature of a message producer: `(field_path, options) -> message`.
pub type MessageFn = Arc<dyn Fn(&str, &RuleOptions) -> String + Send + Sync>;

/// How a failing rule describes itself.
#[derive(Clone, Default)]
pub enum RuleMessage {
    /// `Invalid field '<path>' value.`
    #[default]
    Default,
    /// A fixed message, used verbatim.
    Literal(Cow<'static, str>),
    /// A message computed from the field path and options.
    Producer(MessageFn),
}

impl RuleMessage {
    /// Wraps a producer function.
    pub fn producer<F>(f: F) -> Self
    where
        F: Fn(&str, &RuleOptions) -> String + Send + Sync + 'static,
    {
        Self::Producer(Arc::new(f))
    }

    /// Renders the message for a failed field.
    pub fn render(&self, field: &str, options: &RuleOptions) -> String {
        match self {
            Self::Default => default_message(field),
            Self::Literal(text) => text.to_string(),
            Self::Producer(f) => f(field, options),
        }
    }
}

impl fmt::Debug for RuleMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Producer(_) => f.write_str("Producer(<function>)"),
        }
    }
}

impl From<&'static str> for RuleMessage {
    fn from(text: &'static str) -> Self {
        Self::Literal(Cow::Borrowed(text))
    }
}

impl From<String> for RuleMessage {
    fn from(text: String) -> Self {
        Self::Literal(Cow::Owned(text))
    }
}

impl<T: Into<RuleMessage>> From<Option<T>> for RuleMessage {
    fn from(message: Option<T>) -> Self {
        message.map_or(Self::Default, Into::into)
    }
}

/// The fallback message for rules registered without one.
#[must_use]
pub fn default_message(field: &str) -> String {
    format!("Invalid field '{field}' value.")
}

/// A registered rule.
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    message: RuleMessage,
}

impl Rule {
    /// Creates a rule with the default message.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&Value, &str, &RuleOptions) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: RuleMessage::Default,
        }
    }

    /// Sets the failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<RuleMessage>) -> Self {
        self.message = message.into();
        self
    }

    /// Evaluates the predicate.
    pub fn check(&self, tree: &Value, field: &str, options: &RuleOptions) -> bool {
        (self.predicate)(tree, field, options)
    }

    /// Renders the failure message for `field`.
    pub fn message(&self, field: &str, options: &RuleOptions) -> String {
        self.message.render(field, options)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("predicate", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_message_names_field() {
        let rule = Rule::new(|_, _, _| false);
        assert_eq!(
            rule.message("user.name", &RuleOptions::new()),
            "Invalid field 'user.name' value."
        );
    }

    #[test]
    fn literal_message_is_verbatim() {
        let rule = Rule::new(|_, _, _| false).with_message("Nope.");
        assert_eq!(rule.message("a", &RuleOptions::new()), "Nope.");
    }

    #[test]
    fn producer_sees_field_and_options() {
        let rule = Rule::new(|_, _, _| false).with_message(RuleMessage::producer(|field, opts| {
            format!("{field} failed with {} option(s)", opts.len())
        }));
        let opts = RuleOptions::from_value(json!({"min": 1})).unwrap();
        assert_eq!(rule.message("age", &opts), "age failed with 1 option(s)");
    }

    #[test]
    fn absent_message_falls_back_to_default() {
        let message: RuleMessage = None::<&'static str>.into();
        assert!(matches!(message, RuleMessage::Default));
    }

    #[test]
    fn predicate_receives_tree() {
        let rule = Rule::new(|tree, field, _| tree.get(field).is_some());
        assert!(rule.check(&json!({"a": 1}), "a", &RuleOptions::new()));
        assert!(!rule.check(&json!({"a": 1}), "b", &RuleOptions::new()));
    }
}
