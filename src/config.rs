//! Tap configuration
//!
//! The configuration document names the files (or directories) to sync and
//! the stream each one feeds. It is read as JSON, or as YAML when the path
//! ends in `.yaml`/`.yml`.

use crate::error::{Error, Result};
use crate::types::{JsonValue, REQUIRED_CONFIG_KEYS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// File Entry
// ============================================================================

/// One file or directory to sync into a stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path to a JSONL file or a directory of them
    pub file: PathBuf,

    /// Stream name the records are emitted under
    pub entity: String,

    /// Primary key field names, in order
    #[serde(default)]
    pub keys: Vec<String>,
}

impl FileEntry {
    /// Create a new entry without keys
    pub fn new(file: impl Into<PathBuf>, entity: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            entity: entity.into(),
            keys: Vec::new(),
        }
    }

    /// Set the primary key fields
    #[must_use]
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Entry for a directory child, inheriting entity and keys
    pub fn child(&self, path: PathBuf) -> Self {
        Self {
            file: path,
            entity: self.entity.clone(),
            keys: self.keys.clone(),
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Complete tap configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Entries to sync, in order
    pub files: Vec<FileEntry>,
}

impl Config {
    /// Load configuration from a JSON or YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file '{}': {e}", path.display())))?;

        let value: JsonValue = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Self::from_value(value)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Build configuration from an already decoded document
    pub fn from_value(value: JsonValue) -> Result<Self> {
        check_config(&value, REQUIRED_CONFIG_KEYS)?;

        serde_json::from_value(value).map_err(|e| Error::invalid_value("files", e.to_string()))
    }
}

/// Check that every required key is present in a config document
///
/// All missing keys are reported together.
pub fn check_config(config: &JsonValue, required_keys: &[&str]) -> Result<()> {
    let object = config
        .as_object()
        .ok_or_else(|| Error::config("Config must be a JSON object"))?;

    let missing: Vec<&str> = required_keys
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::missing_fields(missing))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"))
}
