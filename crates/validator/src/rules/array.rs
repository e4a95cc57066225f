//! `array`: the value is a sequence or mapping, optionally constrained by
//! `assoc` and `length.min/max/equal` (element count).

use serde_json::Value;

use super::{ARRAY, all_pass, bound_checks, kind_matches, resolve, typed_message};
use crate::foundation::{BoxedCheck, ValidateExt};
use crate::options::RuleOptions;
use crate::rule::Rule;
use crate::validators::{Numeric, collection_len, is_assoc, is_collection};

/// Builds the `array` rule.
#[must_use]
pub fn rule() -> Rule {
    Rule::new(check).with_message(typed_message("array"))
}

/// Checks the array rule against `field`.
pub fn check(tree: &Value, field: &str, options: &RuleOptions) -> bool {
    let Some(value) = resolve(tree, field) else {
        return true;
    };
    if !kind_matches(ARRAY, field, value, is_collection()) {
        return false;
    }
    let Some(len) = collection_len(value) else {
        return false;
    };

    let mut shape_checks: Vec<BoxedCheck<Value>> = Vec::new();
    if let Some(expected) = options.flag("assoc") {
        shape_checks.push(Box::new(is_assoc().expect(expected)));
    }

    let Some(length_checks) = bound_checks(options, "length") else {
        return false;
    };

    all_pass(ARRAY, field, value, &shape_checks)
        && all_pass(ARRAY, field, &Numeric::from(len), &length_checks)
}
