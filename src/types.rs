//! Common types used throughout tap-jsonl
//!
//! Shared type aliases for decoded JSON data.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, key order preserved as read
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Configuration keys that must be present before a sync can start
pub const REQUIRED_CONFIG_KEYS: &[&str] = &["files"];

/// File extensions (text after the last `.`) that are synced
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jsonl", "json"];
