//! Sync module
//!
//! Turns configured file entries into protocol messages.
//!
//! # Overview
//!
//! - Missing paths are skipped with a warning
//! - Directories are expanded into one entry per child, inheriting entity and keys
//! - Files not ending in `.jsonl`/`.json` are skipped with a warning
//! - Each file emits one schema message (from its first row), one record
//!   message per row and a closing state message
//!
//! Malformed lines and I/O failures are fatal and end the whole run.

mod reader;
mod syncer;

pub use reader::JsonlReader;
pub use syncer::{has_supported_extension, sync, FileOutcome, SyncSummary, Syncer};
