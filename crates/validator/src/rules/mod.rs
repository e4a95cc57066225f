//! Built-in rules
//!
//! | rule | checks |
//! |---|---|
//! | `required` | the field path resolves |
//! | `string` | `notEmpty`, `pattern`, `length.min/max/equal` |
//! | `number` | `float`, `integer`, `positive`, `value.equal/min/max` |
//! | `array` | `assoc`, `length.min/max/equal` |
//! | `boolean` | `isTrue` |
//!
//! Every rule but `required` passes when the field is absent: presence is
//! `required`'s sole concern, so `"string"` and `"required"` compose as two
//! separate items. Flag options are bidirectional, `false` asserts the
//! negation.

use serde_json::Value;

use crate::foundation::{BoxedCheck, Validate, validate_with_all};
use crate::options::{Bound, RuleOptions};
use crate::path::get_by_path;
use crate::rule::{Rule, RuleMessage};
use crate::validators::{Numeric, equal_to, max, min};

pub mod array;
pub mod boolean;
pub mod number;
pub mod required;
pub mod string;

/// Name of the presence rule.
pub const REQUIRED: &str = "required";
/// Name of the string rule.
pub const STRING: &str = "string";
/// Name of the number rule.
pub const NUMBER: &str = "number";
/// Name of the array rule.
pub const ARRAY: &str = "array";
/// Name of the boolean rule.
pub const BOOLEAN: &str = "boolean";

/// The built-in rules, keyed by name.
#[must_use]
pub fn builtins() -> [(&'static str, Rule); 5] {
    [
        (REQUIRED, required::rule()),
        (STRING, string::rule()),
        (NUMBER, number::rule()),
        (ARRAY, array::rule()),
        (BOOLEAN, boolean::rule()),
    ]
}

/// Resolves the field, treating every path error as "absent".
fn resolve<'a>(tree: &'a Value, field: &str) -> Option<&'a Value> {
    get_by_path(tree, field).ok()
}

/// Checks the kind of a resolved value.
fn kind_matches<V>(rule: &'static str, field: &str, value: &Value, kind: V) -> bool
where
    V: Validate<Input = Value>,
{
    match kind.validate(value) {
        Ok(()) => true,
        Err(error) => {
            tracing::trace!(rule, field, error = %error, "kind check failed");
            false
        }
    }
}

/// Runs every option check and logs the ones that failed.
fn all_pass<I: ?Sized>(rule: &'static str, field: &str, input: &I, checks: &[BoxedCheck<I>]) -> bool {
    match validate_with_all(input, checks) {
        Ok(()) => true,
        Err(errors) => {
            tracing::trace!(
                rule,
                field,
                codes = ?errors.codes().collect::<Vec<_>>(),
                "option checks failed"
            );
            false
        }
    }
}

/// Turns `group.min/max/equal` into checks.
///
/// Returns `None` if any of the bounds is unusable.
fn bound_checks(options: &RuleOptions, group: &str) -> Option<Vec<BoxedCheck<Numeric>>> {
    let mut checks: Vec<BoxedCheck<Numeric>> = Vec::new();

    for key in ["min", "max", "equal"] {
        let bound = match options.bound(group, key) {
            None => continue,
            Some(Bound::Number(bound)) => bound,
            Some(Bound::Invalid) => return None,
        };
        let check: BoxedCheck<Numeric> = match key {
            "min" => Box::new(min(bound)),
            "max" => Box::new(max(bound)),
            _ => Box::new(equal_to(bound)),
        };
        checks.push(check);
    }

    Some(checks)
}

/// `Invalid <kind> field '<path>' value.`, listing the option names if any.
fn typed_message(kind: &'static str) -> RuleMessage {
    RuleMessage::producer(move |field, options| {
        if options.is_empty() {
            format!("Invalid {kind} field '{field}' value.")
        } else {
            let keys = options.keys().collect::<Vec<_>>().join(", ");
            format!("Invalid {kind} field '{field}' value. Validation options: {keys}")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_message_without_options() {
        let message = typed_message("string").render("name", &RuleOptions::new());
        assert_eq!(message, "Invalid string field 'name' value.");
    }

    #[test]
    fn typed_message_lists_option_keys() {
        let options =
            RuleOptions::from_value(json!({"notEmpty": true, "length": {"min": 3}})).unwrap();
        let message = typed_message("string").render("name", &options);
        assert_eq!(
            message,
            "Invalid string field 'name' value. Validation options: notEmpty, length"
        );
    }

    #[test]
    fn bound_checks_skip_missing_group() {
        let checks = bound_checks(&RuleOptions::new(), "length").unwrap();
        assert!(checks.is_empty());
    }

    #[test]
    fn bound_checks_reject_invalid_bound() {
        let options = RuleOptions::from_value(json!({"length": {"min": "x"}})).unwrap();
        assert!(bound_checks(&options, "length").is_none());
    }

    #[test]
    fn builtins_cover_every_name() {
        let names: Vec<_> = builtins().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, [REQUIRED, STRING, NUMBER, ARRAY, BOOLEAN]);
    }
}
