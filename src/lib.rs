//! # tap-jsonl
//!
//! A Singer tap that reads newline-delimited JSON files, infers a schema from
//! the first record of each file and writes schema, record and state messages
//! to standard output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tap_jsonl::{config::Config, output::MessageWriter, state::State, sync::sync};
//!
//! fn main() -> tap_jsonl::Result<()> {
//!     let config = Config::from_file("config.json")?;
//!     let mut writer = MessageWriter::stdout();
//!     sync(&config, &State::new(), &mut writer)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌───────────┐    ┌──────────┐
//! │  Config  │───▶│    Syncer    │───▶│ Transform │───▶│  Output  │
//! │ files[]  │    │ dirs → files │    │ coercion  │    │ SCHEMA   │
//! └──────────┘    │ JSONL reader │    └───────────┘    │ RECORD   │
//!                 │ infer schema │                     │ STATE    │
//!                 └──────────────┘                     └──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the tap
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration and file entries
pub mod config;

/// Pass-through process state
pub mod state;

/// Schema inference from JSON data
pub mod schema;

/// Record coercion against a schema
pub mod transform;

/// Protocol messages and writer
pub mod output;

/// File and directory sync
pub mod sync;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
