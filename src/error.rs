//! Error types for tap-jsonl
//!
//! This module defines the error hierarchy for the whole tap.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::path::Path;
use thiserror::Error;

/// The main error type for tap-jsonl
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Config is missing required keys: {fields:?}")]
    MissingConfigFields { fields: Vec<String> },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to parse JSONL in '{path}' at line {line}: {message}")]
    Decode {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Record for stream '{stream}' does not match its schema: {}", .errors.join("; "))]
    SchemaMismatch { stream: String, errors: Vec<String> },

    // ============================================================================
    // State Errors
    // ============================================================================
    #[error("State error: {message}")]
    State { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing fields error
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingConfigFields {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a decode error for a line of a file
    pub fn decode(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.display().to_string(),
            line,
            message: message.into(),
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(stream: impl Into<String>, errors: Vec<String>) -> Self {
        Self::SchemaMismatch {
            stream: stream.into(),
            errors,
        }
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }
}

/// Result type alias for tap-jsonl
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
