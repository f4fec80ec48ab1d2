//! Schema inference from JSON values

use super::types::{JsonType, SchemaProperty};
use crate::types::JsonObject;
use serde_json::Value;

/// Infer a schema descriptor from a single JSON value
///
/// Total over every JSON value: strings, nulls and anything unrecognised
/// become nullable strings.
pub fn infer_schema(value: &Value) -> SchemaProperty {
    match value {
        Value::Object(map) => infer_object(map),
        Value::Array(items) => infer_array(items),
        // Bool is its own variant, so it can never be taken for an integer
        Value::Bool(_) => SchemaProperty::nullable(JsonType::Boolean),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                SchemaProperty::nullable(JsonType::Integer)
            } else {
                SchemaProperty::nullable(JsonType::Number)
            }
        }
        Value::String(_) | Value::Null => SchemaProperty::nullable(JsonType::String),
    }
}

/// Shallow-merge objects left to right; later keys overwrite earlier ones
///
/// A key overwritten by a later object keeps the position where it was first
/// seen. Non-object values are ignored.
pub fn merge_objects<'a, I>(values: I) -> JsonObject
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = JsonObject::new();
    for value in values {
        if let Value::Object(map) = value {
            for (key, val) in map {
                merged.insert(key.clone(), val.clone());
            }
        }
    }
    merged
}

fn infer_object(map: &JsonObject) -> SchemaProperty {
    let properties = map
        .iter()
        .map(|(key, val)| (key.clone(), infer_schema(val)))
        .collect();

    SchemaProperty::object(properties)
}

fn infer_array(items: &[Value]) -> SchemaProperty {
    if items.is_empty() {
        return SchemaProperty::array(None);
    }

    let present: Vec<&Value> = items.iter().filter(|v| !v.is_null()).collect();

    let item_schema = if present.is_empty() {
        infer_schema(&Value::Null)
    } else if present.iter().all(|v| v.is_object()) {
        infer_object(&merge_objects(present))
    } else if present.iter().all(|v| v.is_array()) {
        // Nested arrays are described by the union of their elements
        let inner: Vec<Value> = present
            .iter()
            .filter_map(|v| v.as_array())
            .flatten()
            .cloned()
            .collect();
        infer_array(&inner)
    } else {
        infer_mixed_items(&present)
    };

    SchemaProperty::array(Some(item_schema))
}

/// Item schema for arrays holding scalars, or a mix of kinds
fn infer_mixed_items(present: &[&Value]) -> SchemaProperty {
    let mut item_schema = infer_schema(present[0]);

    for item in &present[1..] {
        let kind = infer_schema(item).kind();
        if kind != item_schema.kind() {
            item_schema = SchemaProperty::nullable(item_schema.kind().merge_with(kind));
        }
    }

    item_schema
}
