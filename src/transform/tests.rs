//! Transformer tests

use super::*;
use crate::error::Error;
use crate::schema::{infer_schema, JsonType, SchemaProperty};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn transform(data: &Value, schema: &SchemaProperty) -> crate::Result<Value> {
    Transformer::new().transform("test", data, schema)
}

// ============================================================================
// Scalar Coercion Tests
// ============================================================================

#[test_case(json!(5), json!(5); "integer stays")]
#[test_case(json!(3.7), json!(3); "float truncates")]
#[test_case(json!(-3.7), json!(-3); "negative float truncates toward zero")]
#[test_case(json!(1.0e19), json!(10_000_000_000_000_000_000_u64); "float above i64 range")]
#[test_case(json!(true), json!(1); "true is one")]
#[test_case(json!("42"), json!(42); "numeric string")]
#[test_case(json!("1,234"), json!(1234); "thousands separator")]
#[test_case(json!(" 7 "), json!(7); "padded string")]
#[test_case(json!(""), Value::Null; "empty string becomes null")]
#[test_case(Value::Null, Value::Null; "null stays null")]
fn test_coerce_integer(input: Value, expected: Value) {
    let schema = SchemaProperty::nullable(JsonType::Integer);
    assert_eq!(transform(&input, &schema).unwrap(), expected);
}

#[test_case(json!(2.5), json!(2.5); "float stays")]
#[test_case(json!(3), json!(3.0); "integer widens")]
#[test_case(json!(false), json!(0.0); "false is zero")]
#[test_case(json!("1,000.5"), json!(1000.5); "numeric string")]
#[test_case(Value::Null, Value::Null; "null stays null")]
fn test_coerce_number(input: Value, expected: Value) {
    let schema = SchemaProperty::nullable(JsonType::Number);
    assert_eq!(transform(&input, &schema).unwrap(), expected);
}

#[test_case(json!("x"), json!("x"); "string stays")]
#[test_case(json!(""), json!(""); "empty string stays")]
#[test_case(json!(12), json!("12"); "integer")]
#[test_case(json!(1.5), json!("1.5"); "float")]
#[test_case(json!(true), json!("true"); "boolean")]
#[test_case(json!({"a": 1}), json!("{\"a\":1}"); "object as json text")]
#[test_case(json!([1, 2]), json!("[1,2]"); "array as json text")]
#[test_case(Value::Null, Value::Null; "null stays null")]
fn test_coerce_string(input: Value, expected: Value) {
    let schema = SchemaProperty::nullable(JsonType::String);
    assert_eq!(transform(&input, &schema).unwrap(), expected);
}

#[test_case(json!(true), json!(true); "boolean stays")]
#[test_case(json!("false"), json!(false); "false string")]
#[test_case(json!("FALSE"), json!(false); "false string any case")]
#[test_case(json!("yes"), json!(true); "non-empty string")]
#[test_case(json!(""), json!(false); "empty string")]
#[test_case(json!(0), json!(false); "zero")]
#[test_case(json!(2), json!(true); "non-zero")]
#[test_case(json!([]), json!(false); "empty array")]
#[test_case(Value::Null, Value::Null; "null stays null")]
fn test_coerce_boolean(input: Value, expected: Value) {
    let schema = SchemaProperty::nullable(JsonType::Boolean);
    assert_eq!(transform(&input, &schema).unwrap(), expected);
}

#[test_case(json!("abc"), JsonType::Integer; "word as integer")]
#[test_case(json!("3.5"), JsonType::Integer; "decimal string as integer")]
#[test_case(json!({"a": 1}), JsonType::Number; "object as number")]
#[test_case(json!("NaN"), JsonType::Number; "nan as number")]
#[test_case(json!(1.0e20), JsonType::Integer; "float above u64 range")]
#[test_case(json!(-1.0e19), JsonType::Integer; "float below i64 range")]
#[test_case(json!(1), JsonType::Object; "integer as object")]
#[test_case(json!("x"), JsonType::Array; "string as array")]
fn test_coerce_failure(input: Value, json_type: JsonType) {
    let schema = if json_type == JsonType::Object {
        infer_schema(&json!({"a": 1}))
    } else {
        SchemaProperty::nullable(json_type)
    };

    let err = transform(&input, &schema).unwrap_err();
    assert!(matches!(err, Error::SchemaMismatch { .. }));
}

// ============================================================================
// Structural Tests
// ============================================================================

#[test]
fn test_matching_row_is_unchanged() {
    let row = json!({"id": 1, "name": "a", "tags": ["x"], "meta": {"ok": true}, "score": 1.5});
    let schema = infer_schema(&row);

    assert_eq!(transform(&row, &schema).unwrap(), row);
}

#[test]
fn test_unknown_keys_are_removed() {
    let schema = infer_schema(&json!({"id": 1, "address": {"city": "Oslo"}}));
    let row = json!({"id": 2, "extra": "drop me", "address": {"city": "Rome", "zip": 1}});

    let mut transformer = Transformer::new();
    let result = transformer.transform("users", &row, &schema).unwrap();

    assert_eq!(result, json!({"id": 2, "address": {"city": "Rome"}}));
    let removed: Vec<&str> = transformer
        .removed_paths()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(removed, vec!["address.zip", "extra"]);
}

#[test]
fn test_missing_keys_stay_missing() {
    let schema = infer_schema(&json!({"id": 1, "name": "a"}));

    let result = transform(&json!({"id": 2}), &schema).unwrap();

    assert_eq!(result, json!({"id": 2}));
}

#[test]
fn test_nested_values_are_coerced() {
    let schema = infer_schema(&json!({"items": [{"qty": 1, "price": 2.5}]}));
    let row = json!({"items": [{"qty": "3", "price": 4}, {"qty": 2.9}]});

    let result = transform(&row, &schema).unwrap();

    assert_eq!(
        result,
        json!({"items": [{"qty": 3, "price": 4.0}, {"qty": 2}]})
    );
}

#[test]
fn test_empty_object_schema_passes_through() {
    let schema = infer_schema(&json!({"meta": {}}));
    let row = json!({"meta": {"anything": [1, 2]}});

    assert_eq!(transform(&row, &schema).unwrap(), row);
}

#[test]
fn test_array_without_items_passes_through() {
    let schema = infer_schema(&json!({"tags": []}));
    let row = json!({"tags": [1, "two", {"three": 3}]});

    assert_eq!(transform(&row, &schema).unwrap(), row);
}

#[test]
fn test_null_container_is_null() {
    let schema = infer_schema(&json!({"meta": {"a": 1}, "tags": ["x"]}));
    let row = json!({"meta": null, "tags": null});

    assert_eq!(transform(&row, &schema).unwrap(), row);
}

#[test]
fn test_mismatch_reports_each_path() {
    let schema = infer_schema(&json!({"id": 1, "nested": {"count": 1}}));
    let row = json!({"id": "abc", "nested": {"count": "many"}});

    let err = transform(&row, &schema).unwrap_err();

    match err {
        Error::SchemaMismatch { stream, errors } => {
            assert_eq!(stream, "test");
            assert_eq!(errors.len(), 2);
            assert!(errors[0].starts_with("id:"));
            assert!(errors[1].starts_with("nested.count:"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_errors_reset_between_records() {
    let schema = infer_schema(&json!({"id": 1}));
    let mut transformer = Transformer::new();

    assert!(transformer
        .transform("users", &json!({"id": "x"}), &schema)
        .is_err());
    assert_eq!(
        transformer
            .transform("users", &json!({"id": 2}), &schema)
            .unwrap(),
        json!({"id": 2})
    );
}

#[test]
fn test_scalar_row_against_scalar_schema() {
    let schema = infer_schema(&json!("first"));

    assert_eq!(transform(&json!(5), &schema).unwrap(), json!("5"));
}
