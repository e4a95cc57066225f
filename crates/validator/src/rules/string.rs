//! `string`: the value is a string, optionally constrained by
//! `notEmpty`, `pattern` and `length.min/max/equal`.
//!
//! Length counts Unicode scalar values, so `"тест"` has length 4.

use serde_json::Value;

use super::{STRING, all_pass, bound_checks, kind_matches, resolve, typed_message};
use crate::foundation::{BoxedCheck, ValidateExt};
use crate::options::RuleOptions;
use crate::rule::Rule;
use crate::validators::{Numeric, full_match, is_string, not_blank};

/// Builds the `string` rule.
#[must_use]
pub fn rule() -> Rule {
    Rule::new(check).with_message(typed_message("string"))
}

/// Checks the string rule against `field`.
pub fn check(tree: &Value, field: &str, options: &RuleOptions) -> bool {
    let Some(value) = resolve(tree, field) else {
        return true;
    };
    if !kind_matches(STRING, field, value, is_string()) {
        return false;
    }
    let Some(text) = value.as_str() else {
        return false;
    };

    let mut checks: Vec<BoxedCheck<str>> = Vec::new();

    if let Some(expected) = options.flag("notEmpty") {
        checks.push(Box::new(not_blank().expect(expected)));
    }

    if let Some(pattern) = options.get("pattern") {
        let Some(pattern) = pattern.as_str() else {
            tracing::warn!(field, "`pattern` option is not a string");
            return false;
        };
        match full_match(pattern) {
            Ok(check) => checks.push(Box::new(check)),
            Err(error) => {
                tracing::warn!(field, pattern, %error, "invalid `pattern` option");
                return false;
            }
        }
    }

    let Some(length_checks) = bound_checks(options, "length") else {
        return false;
    };

    let length = Numeric::from(text.chars().count());
    all_pass(STRING, field, text, &checks) && all_pass(STRING, field, &length, &length_checks)
}
