//! Record transformer
//!
//! Coerces decoded rows into the shape declared by a schema descriptor.

use crate::error::{Error, Result};
use crate::schema::{JsonType, SchemaProperty};
use crate::types::JsonObject;
use serde_json::{Number, Value};
use std::collections::BTreeSet;

/// Outcome of coercing a value to one candidate type
enum Coerced {
    /// The value conforms (possibly after conversion)
    Ok(Value),
    /// The value cannot be read as this type, try the next one
    Mismatch,
    /// The container matched but a nested value failed; already reported
    ChildFailed,
}

/// Transforms records against a schema, collecting mismatches and removed fields
#[derive(Debug, Default)]
pub struct Transformer {
    /// Mismatches of the record currently being transformed
    errors: Vec<String>,
    /// Paths dropped because the schema does not declare them
    removed: BTreeSet<String>,
}

impl Transformer {
    /// Create a new transformer
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform one record of `stream` so it conforms to `schema`
    ///
    /// Fails with [`Error::SchemaMismatch`] listing every path that could not
    /// be coerced.
    pub fn transform(&mut self, stream: &str, data: &Value, schema: &SchemaProperty) -> Result<Value> {
        self.errors.clear();

        match self.transform_recur(data, schema, &[]) {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(Error::schema_mismatch(stream, std::mem::take(&mut self.errors))),
        }
    }

    /// Paths removed from records so far, in sorted order
    pub fn removed_paths(&self) -> &BTreeSet<String> {
        &self.removed
    }

    fn transform_recur(&mut self, data: &Value, schema: &SchemaProperty, path: &[String]) -> Option<Value> {
        for json_type in schema.json_type.types() {
            match self.coerce(data, json_type, schema, path) {
                Coerced::Ok(value) => return Some(value),
                Coerced::ChildFailed => return None,
                Coerced::Mismatch => {}
            }
        }

        let types: Vec<String> = schema.json_type.types().iter().map(ToString::to_string).collect();
        self.errors.push(format!(
            "{}: {} does not match type {:?}",
            display_path(path),
            data,
            types
        ));
        None
    }

    fn coerce(&mut self, data: &Value, json_type: JsonType, schema: &SchemaProperty, path: &[String]) -> Coerced {
        match json_type {
            JsonType::Null => match data {
                Value::Null => Coerced::Ok(Value::Null),
                Value::String(s) if s.is_empty() => Coerced::Ok(Value::Null),
                _ => Coerced::Mismatch,
            },
            JsonType::Object => match data {
                Value::Object(map) => self.transform_object(map, schema, path),
                _ => Coerced::Mismatch,
            },
            JsonType::Array => match data {
                Value::Array(items) => self.transform_array(items, schema, path),
                _ => Coerced::Mismatch,
            },
            JsonType::String => to_string(data),
            JsonType::Integer => to_integer(data),
            JsonType::Number => to_number(data),
            JsonType::Boolean => to_boolean(data),
        }
    }

    fn transform_object(&mut self, map: &JsonObject, schema: &SchemaProperty, path: &[String]) -> Coerced {
        // Don't touch an object whose schema declares nothing
        if !schema.properties.as_ref().is_some_and(|p| !p.is_empty()) {
            return Coerced::Ok(Value::Object(map.clone()));
        }

        let mut result = JsonObject::new();
        let mut failed = false;

        for (key, value) in map {
            let mut child_path = path.to_vec();
            child_path.push(key.clone());

            match schema.get_property(key) {
                Some(sub_schema) => match self.transform_recur(value, sub_schema, &child_path) {
                    Some(transformed) => {
                        result.insert(key.clone(), transformed);
                    }
                    None => failed = true,
                },
                None => {
                    self.removed.insert(child_path.join("."));
                }
            }
        }

        if failed {
            Coerced::ChildFailed
        } else {
            Coerced::Ok(Value::Object(result))
        }
    }

    fn transform_array(&mut self, items: &[Value], schema: &SchemaProperty, path: &[String]) -> Coerced {
        let Some(item_schema) = schema.items.as_deref() else {
            return Coerced::Ok(Value::Array(items.to_vec()));
        };

        let mut result = Vec::with_capacity(items.len());
        let mut failed = false;

        for (index, item) in items.iter().enumerate() {
            let mut child_path = path.to_vec();
            child_path.push(index.to_string());

            match self.transform_recur(item, item_schema, &child_path) {
                Some(transformed) => result.push(transformed),
                None => failed = true,
            }
        }

        if failed {
            Coerced::ChildFailed
        } else {
            Coerced::Ok(Value::Array(result))
        }
    }
}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

fn to_string(data: &Value) -> Coerced {
    match data {
        Value::Null => Coerced::Mismatch,
        Value::String(s) => Coerced::Ok(Value::String(s.clone())),
        Value::Number(n) => Coerced::Ok(Value::String(n.to_string())),
        Value::Bool(b) => Coerced::Ok(Value::String(b.to_string())),
        composite => Coerced::Ok(Value::String(composite.to_string())),
    }
}

fn to_integer(data: &Value) -> Coerced {
    match data {
        Value::Number(n) if n.is_i64() || n.is_u64() => Coerced::Ok(Value::Number(n.clone())),
        Value::Number(n) => n
            .as_f64()
            .and_then(truncate_to_integer)
            .map_or(Coerced::Mismatch, Coerced::Ok),
        Value::Bool(b) => Coerced::Ok(Value::from(i64::from(*b))),
        Value::String(s) => {
            let cleaned = s.replace(',', "");
            let cleaned = cleaned.trim();
            if let Ok(i) = cleaned.parse::<i64>() {
                Coerced::Ok(Value::from(i))
            } else if let Ok(u) = cleaned.parse::<u64>() {
                Coerced::Ok(Value::from(u))
            } else {
                Coerced::Mismatch
            }
        }
        _ => Coerced::Mismatch,
    }
}

/// Truncate toward zero into an `i64`, or a `u64` above the `i64` range
///
/// Values outside both ranges have no exact JSON integer and are rejected.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn truncate_to_integer(f: f64) -> Option<Value> {
    let truncated = f.trunc();
    if !truncated.is_finite() {
        None
    } else if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(Value::from(truncated as i64))
    } else if truncated >= 0.0 && truncated < u64::MAX as f64 {
        Some(Value::from(truncated as u64))
    } else {
        None
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_number(data: &Value) -> Coerced {
    let float = match data {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.replace(',', "").trim().parse::<f64>().ok(),
        _ => None,
    };

    // Number::from_f64 rejects NaN and infinities
    float
        .and_then(Number::from_f64)
        .map_or(Coerced::Mismatch, |n| Coerced::Ok(Value::Number(n)))
}

fn to_boolean(data: &Value) -> Coerced {
    let truthy = match data {
        Value::Null => return Coerced::Mismatch,
        Value::Bool(b) => *b,
        Value::String(s) => !(s.is_empty() || s.eq_ignore_ascii_case("false")),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    };
    Coerced::Ok(Value::Bool(truthy))
}
