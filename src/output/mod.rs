//! Output module
//!
//! Handles the messages written to standard output.
//!
//! # Overview
//!
//! - `SCHEMA` messages announce a stream and the shape of its records
//! - `RECORD` messages carry one transformed row each
//! - `STATE` messages echo the process state after every file
//! - Discovery prints an empty catalog

mod message;
mod writer;

pub use message::{Catalog, Message};
pub use writer::{write_catalog, MessageWriter};
