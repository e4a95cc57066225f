//! `required`: the field path resolves to a non-null value.

use serde_json::Value;

use crate::options::RuleOptions;
use crate::path::is_path_set;
use crate::rule::{Rule, RuleMessage};

/// Builds the `required` rule.
#[must_use]
pub fn rule() -> Rule {
    Rule::new(check).with_message(RuleMessage::producer(|field, _| {
        format!("Field '{field}' is required.")
    }))
}

/// Passes iff `field` resolves in `tree`.
pub fn check(tree: &Value, field: &str, _options: &RuleOptions) -> bool {
    is_path_set(tree, field)
}
