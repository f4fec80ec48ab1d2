//! CLI module
//!
//! Command-line interface for running the tap.
//!
//! # Modes
//!
//! - `--discover` - Print an empty catalog
//! - `--config <path>` - Sync the configured files to standard output

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
