//! Protocol message types
//!
//! The three messages a tap writes to standard output, plus the catalog
//! printed in discovery mode.

use crate::schema::SchemaProperty;
use crate::state::State;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// A message emitted during sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Message {
    /// Shape of the records that follow for a stream
    Schema {
        /// Stream name
        stream: String,
        /// Schema descriptor inferred from the stream's first record
        schema: SchemaProperty,
        /// Primary key field names
        key_properties: Vec<String>,
    },
    /// One transformed row
    Record {
        /// Stream name
        stream: String,
        /// The row
        record: JsonValue,
    },
    /// State checkpoint
    State {
        /// Opaque state mapping
        value: State,
    },
}

impl Message {
    /// Create a schema message
    pub fn schema(stream: impl Into<String>, schema: SchemaProperty, key_properties: Vec<String>) -> Self {
        Self::Schema {
            stream: stream.into(),
            schema,
            key_properties,
        }
    }

    /// Create a record message
    pub fn record(stream: impl Into<String>, record: JsonValue) -> Self {
        Self::Record {
            stream: stream.into(),
            record,
        }
    }

    /// Create a state message
    pub fn state(value: State) -> Self {
        Self::State { value }
    }
}

/// Discovery catalog
///
/// Streams are only known once files are read, so discovery always reports
/// an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Stream entries
    pub streams: Vec<JsonValue>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }
}
