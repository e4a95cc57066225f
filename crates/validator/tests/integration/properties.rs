//! Property-based tests of absence, length counting, flags and idempotence.

use nadir_validator::prelude::*;
use nadir_validator::rules::{self, ARRAY, BOOLEAN, NUMBER, STRING};
use proptest::prelude::*;
use serde_json::{Value, json};

fn tree() -> Value {
    json!({
        "a": {"b": "text", "n": 3},
        "b": [1, 2, 3],
    })
}

fn run_one(tree: Value, item: Value) -> Vec<String> {
    let mut validator = Validator::new(tree);
    validator.add_raw_item(&item).unwrap();
    validator.run().unwrap();
    validator.into_errors().unwrap()
}

proptest! {
    #[test]
    fn absent_path_fails_required_only(path in "[c-z]{1,6}(\\.[a-z0-9]{1,4}){0,2}") {
        let tree = tree();
        let options = RuleOptions::new();
        prop_assert!(!is_path_set(&tree, &path));
        prop_assert!(!rules::required::check(&tree, &path, &options));

        for (name, rule) in rules::builtins() {
            if [STRING, NUMBER, ARRAY, BOOLEAN].contains(&name) {
                prop_assert!(rule.check(&tree, &path, &options), "{} failed on {}", name, path);
            }
        }
    }

    #[test]
    fn string_length_counts_chars(value in "\\PC{0,8}") {
        let errors = run_one(
            json!({ "field": value.clone() }),
            json!(["field", "string", {"length": {"min": 3, "max": 5}}]),
        );
        let len = value.chars().count();
        prop_assert_eq!(errors.is_empty(), (3..=5).contains(&len));
    }

    #[test]
    fn positive_flag_is_bidirectional(n in -1000_i64..1000, flag in any::<bool>()) {
        let errors = run_one(
            json!({ "n": n }),
            json!(["n", "number", {"positive": flag}]),
        );
        prop_assert_eq!(errors.is_empty(), (n > 0) == flag);
    }

    #[test]
    fn run_is_idempotent(name in "\\PC{0,6}", age in -5_i64..150) {
        let mut validator = Validator::new(json!({"name": name, "age": age}));
        validator
            .set_raw_items(&json!([
                ["name", "string", {"notEmpty": true, "length": {"max": 4}}],
                ["age", "number", {"integer": true, "value": {"min": 0, "max": 120}}],
                [["name", "email"], "required"],
            ]))
            .unwrap();

        validator.run().unwrap();
        let first = validator.errors().unwrap().to_vec();
        validator.run().unwrap();
        prop_assert_eq!(validator.errors().unwrap(), first.as_slice());
    }
}
