//! Message writer
//!
//! Writes protocol messages as JSON lines to any byte sink.

use super::message::{Catalog, Message};
use crate::error::Result;
use std::io::{self, StdoutLock, Write};

/// Writes one compact JSON document per line, flushing after each message
#[derive(Debug)]
pub struct MessageWriter<W: Write> {
    out: W,
}

impl MessageWriter<StdoutLock<'static>> {
    /// Create a writer over the locked standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> MessageWriter<W> {
    /// Create a new writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a single message
    pub fn write(&mut self, message: &Message) -> Result<()> {
        serde_json::to_writer(&mut self.out, message)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Write a catalog as pretty JSON (2-space indent)
pub fn write_catalog<W: Write>(out: &mut W, catalog: &Catalog) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, catalog)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
