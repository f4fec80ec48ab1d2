//! Schema inference module
//!
//! Derives a structural schema descriptor from one decoded JSON value.
//!
//! # Features
//!
//! - **Type Inference**: Maps each JSON value to a nullable JSON Schema type
//! - **Nested Object Support**: Handles nested objects recursively, keeping key order
//! - **Array Item Inference**: Object elements are shallow-merged into one item schema,
//!   nested arrays are described by all of their elements together, and
//!   scalar elements are widened to a common type

mod inference;
mod types;

pub use inference::{infer_schema, merge_objects};
pub use types::{JsonType, JsonTypeOrArray, SchemaProperty};
