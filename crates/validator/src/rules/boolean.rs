//! `boolean`: the value is a boolean, optionally pinned by `isTrue`.

use serde_json::Value;

use super::{BOOLEAN, all_pass, kind_matches, resolve, typed_message};
use crate::foundation::{BoxedCheck, ValidateExt};
use crate::options::RuleOptions;
use crate::rule::Rule;
use crate::validators::{is_bool, is_true};

/// Builds the `boolean` rule.
#[must_use]
pub fn rule() -> Rule {
    Rule::new(check).with_message(typed_message("boolean"))
}

/// Checks the boolean rule against `field`.
pub fn check(tree: &Value, field: &str, options: &RuleOptions) -> bool {
    let Some(value) = resolve(tree, field) else {
        return true;
    };
    if !kind_matches(BOOLEAN, field, value, is_bool()) {
        return false;
    }
    let Some(flag) = value.as_bool() else {
        return false;
    };

    let mut checks: Vec<BoxedCheck<bool>> = Vec::new();
    if let Some(expected) = options.flag("isTrue") {
        checks.push(Box::new(is_true().expect(expected)));
    }

    all_pass(BOOLEAN, field, &flag, &checks)
}
