//! State types
//!
//! State is serialized to JSON exactly as it was read.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Opaque process state, a JSON mapping re-emitted after every file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    value: JsonObject,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::State {
            message: format!("Failed to read state file '{}': {e}", path.display()),
        })?;
        Self::from_json(&contents)
    }

    /// Parse state from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json).map_err(|e| Error::State {
            message: format!("Failed to parse state JSON: {e}"),
        })?;

        match value {
            JsonValue::Object(value) => Ok(Self { value }),
            other => Err(Error::state(format!(
                "State must be a JSON object, got: {other}"
            ))),
        }
    }

    /// The state mapping
    pub fn value(&self) -> &JsonObject {
        &self.value
    }

    /// Check if the state is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<JsonObject> for State {
    fn from(value: JsonObject) -> Self {
        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_state_default() {
        let state = State::new();
        assert!(state.is_empty());
        assert_eq!(serde_json::to_string(&state).unwrap(), "{}");
    }

    #[test]
    fn test_state_serializes_verbatim() {
        let text = r#"{"bookmarks":{"users":{"offset":10}},"currently_syncing":null}"#;
        let state = State::from_json(text).unwrap();

        assert_eq!(serde_json::to_string(&state).unwrap(), text);
    }

    #[test]
    fn test_state_rejects_non_object() {
        let err = State::from_json("[1]").unwrap_err();
        assert!(matches!(err, Error::State { .. }));

        let err = State::from_json("{oops").unwrap_err();
        assert!(matches!(err, Error::State { .. }));
    }

    #[test]
    fn test_state_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"cursor": "2024-01-01"}}"#).unwrap();

        let state = State::from_file(file.path()).unwrap();
        assert_eq!(state.value().get("cursor"), Some(&json!("2024-01-01")));
    }

    #[test]
    fn test_state_missing_file() {
        let err = State::from_file("/nonexistent/state.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read state file"));
    }
}
