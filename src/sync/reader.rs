//! JSONL reader
//!
//! Streams a file one decoded line at a time.

use crate::error::{Error, Result, ResultExt};
use crate::types::JsonValue;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Iterator over the JSON documents of a JSONL source, one per line
///
/// Every line must hold a complete JSON document. A malformed or blank line
/// yields a [`Error::Decode`] naming the file and the 1-based line number.
#[derive(Debug)]
pub struct JsonlReader<R> {
    lines: Lines<R>,
    path: PathBuf,
    line: usize,
}

impl JsonlReader<BufReader<File>> {
    /// Open a file for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> JsonlReader<R> {
    /// Create a reader over any buffered source; `path` is used in errors
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            path: path.into(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = Result<JsonValue>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line += 1;

        Some(line.map_err(Error::from).and_then(|text| {
            serde_json::from_str(&text)
                .map_err(|e| Error::decode(&self.path, self.line, e.to_string()))
        }))
    }
}
