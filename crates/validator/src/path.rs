//! Dotted-path access into a data tree
//!
//! A path such as `"user.address.city"` is split on `.` and resolved one
//! segment at a time. Mappings are keyed by name; sequences are keyed by
//! their integer positions, so `"items.0.sku"` reaches into a list. There is
//! no escaping: a key containing a literal dot cannot be addressed.
//!
//! A `null` value counts as absent, matching the "set and not null" notion
//! of presence the `required` rule checks.

use serde_json::Value;

use crate::error::PathError;

/// Resolves `path` against `tree`.
///
/// # Errors
///
/// - [`PathError::NotFound`] if any segment, including the last, is absent
///   or `null`.
/// - [`PathError::NotAMapping`] if an intermediate segment holds a scalar.
///
/// # Examples
///
/// ```
/// use nadir_validator::path::get_by_path;
/// use serde_json::json;
///
/// let tree = json!({"user": {"address": {"city": "Oslo"}}});
/// assert_eq!(get_by_path(&tree, "user.address.city").unwrap(), "Oslo");
/// assert!(get_by_path(&tree, "user.phone").is_err());
/// ```
pub fn get_by_path<'a>(tree: &'a Value, path: &str) -> Result<&'a Value, PathError> {
    let mut current = tree;
    let mut parent: Option<&str> = None;

    for segment in path.split('.') {
        let next = match (current, parent) {
            (Value::Object(map), _) => map.get(segment),
            (Value::Array(items), _) => segment
                .parse::<usize>()
                .ok()
                .filter(|_| is_position(segment))
                .and_then(|index| items.get(index)),
            (_, Some(parent)) => {
                return Err(PathError::NotAMapping {
                    path: path.to_owned(),
                    segment: parent.to_owned(),
                });
            }
            // A scalar root holds no keys at all.
            (_, None) => None,
        };

        current = match next {
            Some(Value::Null) | None => {
                return Err(PathError::NotFound {
                    path: path.to_owned(),
                    segment: segment.to_owned(),
                });
            }
            Some(value) => value,
        };
        parent = Some(segment);
    }

    Ok(current)
}

/// Returns true iff [`get_by_path`] would succeed.
///
/// Rules use this to tell "absent" apart from "present but invalid".
#[must_use]
pub fn is_path_set(tree: &Value, path: &str) -> bool {
    get_by_path(tree, path).is_ok()
}

/// Canonical position: `"0"` or digits without a leading zero.
fn is_position(segment: &str) -> bool {
    segment.bytes().all(|b| b.is_ascii_digit()) && (segment == "0" || !segment.starts_with('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree() -> Value {
        json!({
            "user": {
                "name": "Al",
                "tags": ["a", "b"],
                "address": {"city": "Oslo", "zip": null},
            },
            "count": 3,
        })
    }

    #[test]
    fn resolves_top_level_key() {
        assert_eq!(get_by_path(&tree(), "count").unwrap(), &json!(3));
    }

    #[test]
    fn resolves_nested_key() {
        assert_eq!(get_by_path(&tree(), "user.address.city").unwrap(), &json!("Oslo"));
    }

    #[test]
    fn resolves_sequence_position() {
        assert_eq!(get_by_path(&tree(), "user.tags.1").unwrap(), &json!("b"));
    }

    #[test]
    fn returns_whole_subtree() {
        let tree = tree();
        let address = get_by_path(&tree, "user.address").unwrap();
        assert!(address.is_object());
    }

    #[test]
    fn missing_last_segment_is_not_found() {
        assert_eq!(
            get_by_path(&tree(), "user.email"),
            Err(PathError::NotFound {
                path: "user.email".into(),
                segment: "email".into(),
            })
        );
    }

    #[test]
    fn missing_intermediate_segment_is_not_found() {
        assert!(matches!(
            get_by_path(&tree(), "account.id"),
            Err(PathError::NotFound { segment, .. }) if segment == "account"
        ));
    }

    #[test]
    fn descending_through_scalar_is_not_a_mapping() {
        assert!(matches!(
            get_by_path(&tree(), "user.name.first"),
            Err(PathError::NotAMapping { segment, .. }) if segment == "name"
        ));
    }

    #[test]
    fn null_counts_as_absent() {
        assert!(!is_path_set(&tree(), "user.address.zip"));
    }

    #[test]
    fn sequence_rejects_named_and_padded_segments() {
        assert!(!is_path_set(&tree(), "user.tags.first"));
        assert!(!is_path_set(&tree(), "user.tags.01"));
        assert!(!is_path_set(&tree(), "user.tags.+1"));
        assert!(!is_path_set(&tree(), "user.tags.5"));
    }

    #[test]
    fn root_must_contain_the_key() {
        assert!(!is_path_set(&json!("scalar"), "anything"));
    }
}
