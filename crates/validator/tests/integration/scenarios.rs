//! Whole-run scenarios.

use nadir_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn order() -> Value {
    json!({
        "customer": {
            "name": "Ada Lovelace",
            "email": "ada@example.org",
            "vip": true,
        },
        "items": [
            {"sku": "A-1", "qty": 2, "price": 9.5},
            {"sku": "B-22", "qty": 0, "price": "4.25"},
        ],
        "meta": {"source": "web"},
        "note": null,
    })
}

#[test]
fn valid_order_passes() {
    let mut validator = Validator::new(order());
    validator
        .set_raw_items(&json!([
            [["customer.name", "customer.email", "items"], "required"],
            ["customer.name", "string", {"notEmpty": true, "length": {"max": 64}}],
            ["customer.email", "string", {"pattern": "[^@\\s]+@[^@\\s]+"}],
            ["customer.vip", "boolean", {"isTrue": true}],
            ["items", "array", {"assoc": false, "length": {"min": 1}}],
            ["items.0.qty", "number", {"integer": true, "positive": true}],
            ["items.0.price", "number", {"float": true}],
            ["items.1.price", "number", {"value": {"min": 1, "max": 10}}],
            ["meta", "array", {"assoc": true}],
            ["note", "string"],
        ]))
        .unwrap();

    validator.run().unwrap();
    assert_eq!(validator.errors().unwrap(), Vec::<String>::new().as_slice());
    assert_eq!(validator.is_valid(), Ok(true));
}

#[test]
fn failures_are_reported_in_order() {
    let mut validator = Validator::new(order());
    validator
        .set_raw_items(&json!([
            ["items.1.qty", "number", {"positive": true}],
            ["customer.phone", "required"],
            ["items.1.price", "number", {"float": true}],
            ["customer.vip", "boolean", {"isTrue": false}],
            ["meta", "array"],
            ["customer.name", "number"],
        ]))
        .unwrap();

    validator.run().unwrap();
    assert_eq!(
        validator.errors().unwrap(),
        [
            "Invalid number field 'items.1.qty' value. Validation options: positive",
            "Field 'customer.phone' is required.",
            "Invalid number field 'items.1.price' value. Validation options: float",
            "Invalid boolean field 'customer.vip' value. Validation options: isTrue",
            "Invalid number field 'customer.name' value.",
        ]
    );
}

#[test]
fn path_through_a_scalar_counts_as_absent() {
    let mut validator = Validator::new(order());
    validator
        .set_raw_items(&json!([
            ["customer.name.first", "string", {"notEmpty": true}],
            ["customer.name.first", "number", {"positive": true}],
            ["customer.name.first", "array", {"length": {"min": 1}}],
            ["customer.name.first", "boolean", {"isTrue": true}],
            ["customer.name.first", "required"],
        ]))
        .unwrap();

    validator.run().unwrap();
    assert_eq!(
        validator.errors().unwrap(),
        ["Field 'customer.name.first' is required."]
    );
}

#[test]
fn multi_field_item_checks_each_field() {
    let mut validator = Validator::new(json!({"a": 1}));
    validator
        .add_raw_item(&json!([["a", "b"], "required", []]))
        .unwrap();
    validator.run().unwrap();
    assert_eq!(validator.errors().unwrap(), ["Field 'b' is required."]);
}

#[test]
fn short_name_fails_length() {
    let mut validator = Validator::new(json!({"user": {"name": "Al"}}));
    validator
        .add_raw_item(&json!(["user.name", "string", {"length": {"min": 3}}]))
        .unwrap();
    validator.run().unwrap();

    assert_eq!(validator.is_valid(), Ok(false));
    let errors = validator.errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("user.name"));
}

#[test]
fn unknown_rule_stops_the_run() {
    let evaluated = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = evaluated.clone();

    let mut validator = Validator::new(json!({"a": 1}));
    validator
        .add_rule(
            "counted",
            move |_, _, _| {
                counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                true
            },
            None::<String>,
        )
        .set_raw_items(&json!([
            ["a", "counted"],
            ["a", "bogus"],
            ["a", "counted"],
        ]))
        .unwrap();

    assert_eq!(
        validator.run(),
        Err(ValidatorError::UnknownRule("bogus".into()))
    );
    assert_eq!(evaluated.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert!(matches!(
        validator.is_valid(),
        Err(ValidatorError::RunAborted { .. })
    ));
}

#[test]
fn accessors_require_a_run() {
    let validator = Validator::new(order());
    assert_eq!(validator.is_valid(), Err(ValidatorError::NotYetRun));
    assert_eq!(validator.errors(), Err(ValidatorError::NotYetRun));
}

#[test]
fn overriding_a_builtin_changes_its_message() {
    let mut validator = Validator::new(json!({}));
    validator
        .add_rule(
            "required",
            |tree, field, _| is_path_set(tree, field),
            RuleMessage::producer(|field, _| format!("{field}: missing")),
        )
        .add_raw_item(&json!(["id", "required"]))
        .unwrap();
    validator.run().unwrap();
    assert_eq!(validator.errors().unwrap(), ["id: missing"]);
}

#[test]
fn custom_leaf_check_inside_a_rule() {
    let mut validator = Validator::new(json!({"port": 80, "other": 70000}));
    validator
        .add_rule(
            "port",
            |tree, field, _| {
                let checks: Vec<BoxedCheck<f64>> = vec![
                    Box::new(nadir_validator::validators::min(1.0)),
                    Box::new(nadir_validator::validators::max(65_535.0)),
                ];
                get_by_path(tree, field)
                    .ok()
                    .and_then(Value::as_f64)
                    .is_some_and(|port| validate_with_all(&port, &checks).is_ok())
            },
            "Port out of range.",
        )
        .add_raw_item(&json!([["port", "other"], "port"]))
        .unwrap();
    validator.run().unwrap();
    assert_eq!(validator.errors().unwrap(), ["Port out of range."]);
}
