//! Schema types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl JsonType {
    /// Merge two types, returning the more general type
    pub fn merge_with(self, other: JsonType) -> JsonType {
        match (self, other) {
            (a, b) if a == b => a,
            (JsonType::Null, other) | (other, JsonType::Null) => other,
            (JsonType::Integer, JsonType::Number) | (JsonType::Number, JsonType::Integer) => {
                JsonType::Number
            }
            // Incompatible types - fall back to string
            _ => JsonType::String,
        }
    }
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Array => write!(f, "array"),
            JsonType::Null => write!(f, "null"),
        }
    }
}

/// JSON type can be a single type or array of types (for nullable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonTypeOrArray {
    Single(JsonType),
    Multiple(Vec<JsonType>),
}

impl JsonTypeOrArray {
    /// Create a nullable type, serialized as `[type, "null"]`
    pub fn nullable(t: JsonType) -> Self {
        if t == JsonType::Null {
            JsonTypeOrArray::Single(JsonType::Null)
        } else {
            JsonTypeOrArray::Multiple(vec![t, JsonType::Null])
        }
    }

    /// Check if this type is nullable
    pub fn is_nullable(&self) -> bool {
        match self {
            JsonTypeOrArray::Single(JsonType::Null) => true,
            JsonTypeOrArray::Multiple(types) => types.contains(&JsonType::Null),
            _ => false,
        }
    }

    /// Get the primary (non-null) type
    pub fn primary_type(&self) -> Option<JsonType> {
        match self {
            JsonTypeOrArray::Single(t) => Some(*t),
            JsonTypeOrArray::Multiple(types) => types.iter().copied().find(|t| *t != JsonType::Null),
        }
    }

    /// All declared types, non-null types first and `null` last
    pub fn types(&self) -> Vec<JsonType> {
        let mut types = match self {
            JsonTypeOrArray::Single(t) => vec![*t],
            JsonTypeOrArray::Multiple(types) => types.clone(),
        };
        // Stable sort keeps the declared order of the non-null types
        types.sort_by_key(|t| *t == JsonType::Null);
        types
    }
}

/// Structural description of one JSON value's shape
///
/// Every kind is unioned with `null`. Objects carry their properties in
/// first-seen order; arrays carry one item descriptor, or none when the
/// array they were inferred from was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// Property type(s)
    #[serde(rename = "type")]
    pub json_type: JsonTypeOrArray,

    /// Nested properties (for objects)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaProperty>>,

    /// Array items schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaProperty>>,
}

impl SchemaProperty {
    /// Create a nullable scalar property
    pub fn nullable(json_type: JsonType) -> Self {
        Self {
            json_type: JsonTypeOrArray::nullable(json_type),
            properties: None,
            items: None,
        }
    }

    /// Create a nullable object property with nested properties
    pub fn object(properties: IndexMap<String, SchemaProperty>) -> Self {
        Self {
            json_type: JsonTypeOrArray::nullable(JsonType::Object),
            properties: Some(properties),
            items: None,
        }
    }

    /// Create a nullable array property, with an item schema if one is known
    pub fn array(items: Option<SchemaProperty>) -> Self {
        Self {
            json_type: JsonTypeOrArray::nullable(JsonType::Array),
            properties: None,
            items: items.map(Box::new),
        }
    }

    /// The non-null kind of this property
    pub fn kind(&self) -> JsonType {
        self.json_type.primary_type().unwrap_or(JsonType::Null)
    }

    /// Check if nullable
    pub fn is_nullable(&self) -> bool {
        self.json_type.is_nullable()
    }

    /// Get a nested property (objects only)
    pub fn get_property(&self, name: &str) -> Option<&SchemaProperty> {
        self.properties.as_ref()?.get(name)
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
