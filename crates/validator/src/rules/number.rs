//! `number`: the value is numeric, optionally constrained by `float`,
//! `integer`, `positive` and `value.equal/min/max`.
//!
//! Numeric strings such as `"42"` are numeric but carry no number type, so
//! they fail both `float: true` and `integer: true`.

use serde_json::Value;

use super::{NUMBER, all_pass, bound_checks, kind_matches, resolve, typed_message};
use crate::foundation::{BoxedCheck, ValidateExt};
use crate::options::RuleOptions;
use crate::rule::Rule;
use crate::validators::{is_float, is_integer, is_numeric, numeric_value, positive};

/// Builds the `number` rule.
#[must_use]
pub fn rule() -> Rule {
    Rule::new(check).with_message(typed_message("number"))
}

/// Checks the number rule against `field`.
pub fn check(tree: &Value, field: &str, options: &RuleOptions) -> bool {
    let Some(value) = resolve(tree, field) else {
        return true;
    };
    if !kind_matches(NUMBER, field, value, is_numeric()) {
        return false;
    }
    let Some(number) = numeric_value(value) else {
        return false;
    };

    let mut type_checks: Vec<BoxedCheck<Value>> = Vec::new();
    if let Some(expected) = options.flag("float") {
        type_checks.push(Box::new(is_float().expect(expected)));
    }
    if let Some(expected) = options.flag("integer") {
        type_checks.push(Box::new(is_integer().expect(expected)));
    }

    let Some(mut value_checks) = bound_checks(options, "value") else {
        return false;
    };
    if let Some(expected) = options.flag("positive") {
        value_checks.push(Box::new(positive().expect(expected)));
    }

    all_pass(NUMBER, field, value, &type_checks) && all_pass(NUMBER, field, &number, &value_checks)
}
