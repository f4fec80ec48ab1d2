//! File and directory syncer
//!
//! Walks the configured entries, infers one schema per file from its first
//! row and writes schema, record and state messages.

use super::reader::JsonlReader;
use crate::config::{Config, FileEntry};
use crate::error::{Result, ResultExt};
use crate::output::{Message, MessageWriter};
use crate::schema::infer_schema;
use crate::state::State;
use crate::transform::Transformer;
use crate::types::SUPPORTED_EXTENSIONS;
use std::io::Write;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::{debug, info, warn};

/// Counters for one sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Files read to the end
    pub files_synced: usize,
    /// Files skipped for their extension
    pub files_skipped: usize,
    /// Paths that did not exist
    pub paths_missing: usize,
    /// Record messages written
    pub records: u64,
}

/// Result of syncing a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was read; `records` rows were emitted
    Synced { records: u64 },
    /// The file's extension is not synced
    Skipped,
}

/// Syncs file entries to a message writer
///
/// State is borrowed for the whole run and written unchanged after each file.
pub struct Syncer<'a, W: Write> {
    state: &'a State,
    writer: &'a mut MessageWriter<W>,
    summary: SyncSummary,
}

impl<'a, W: Write> Syncer<'a, W> {
    /// Create a new syncer
    pub fn new(state: &'a State, writer: &'a mut MessageWriter<W>) -> Self {
        Self {
            state,
            writer,
            summary: SyncSummary::default(),
        }
    }

    /// Sync every configured entry in order
    ///
    /// Stops at the first fatal error; messages already written stay written.
    pub fn sync(mut self, config: &Config) -> Result<SyncSummary> {
        info!("Starting sync");

        for entry in &config.files {
            self.process(entry)?;
        }

        info!(
            "Sync completed: {} files synced, {} skipped, {} missing, {} records",
            self.summary.files_synced,
            self.summary.files_skipped,
            self.summary.paths_missing,
            self.summary.records
        );
        Ok(self.summary)
    }

    /// Sync a file entry, expanding directories recursively
    ///
    /// Directories are walked depth-first in listing order through an explicit
    /// work list, so nesting depth does not grow the call stack.
    pub fn process(&mut self, entry: &FileEntry) -> Result<()> {
        let mut pending = vec![entry.clone()];

        while let Some(entry) = pending.pop() {
            let path = entry.file.as_path();

            if !path.exists() {
                warn!("{} does not exist, skipping", path.display());
                self.summary.paths_missing += 1;
                continue;
            }

            if path.is_dir() {
                info!(
                    "Syncing all JSONL files in directory '{}' recursively",
                    with_trailing_separator(path)
                );
                let children = list_dir(path)?;
                // Reversed so the first listed child is popped first
                pending.extend(children.into_iter().rev().map(|child| entry.child(child)));
            } else {
                self.sync_file(&entry)?;
            }
        }

        Ok(())
    }

    /// Sync a single JSONL file
    pub fn sync_file(&mut self, entry: &FileEntry) -> Result<FileOutcome> {
        if !has_supported_extension(&entry.file) {
            warn!("Skipping non-jsonl file '{}'", entry.file.display());
            warn!("Please provide a jsonl file that ends with '.jsonl' or 'json'; e.g. 'users.jsonl'");
            self.summary.files_skipped += 1;
            return Ok(FileOutcome::Skipped);
        }

        info!(
            "Syncing entity {} from file: {}",
            entry.entity,
            entry.file.display()
        );

        let mut rows = JsonlReader::open(&entry.file)?;
        let mut records = 0;

        if let Some(first) = rows.next().transpose()? {
            // The schema comes from the first row only and is never widened
            let schema = infer_schema(&first);
            debug!("Inferred schema for {}: {}", entry.entity, schema.to_json());
            self.writer.write(&Message::schema(
                entry.entity.clone(),
                schema.clone(),
                entry.keys.clone(),
            ))?;

            let mut transformer = Transformer::new();
            for row in std::iter::once(Ok(first)).chain(rows) {
                let record = transformer.transform(&entry.entity, &row?, &schema)?;
                self.writer.write(&Message::record(entry.entity.clone(), record))?;
                records += 1;
            }

            if !transformer.removed_paths().is_empty() {
                debug!(
                    "Removed paths list for {}: {:?}",
                    entry.entity,
                    transformer.removed_paths()
                );
            }
        }

        self.writer.write(&Message::state(self.state.clone()))?;

        self.summary.files_synced += 1;
        self.summary.records += records;
        Ok(FileOutcome::Synced { records })
    }
}

/// Sync every entry of `config`, writing messages to `writer`
pub fn sync<W: Write>(
    config: &Config,
    state: &State,
    writer: &mut MessageWriter<W>,
) -> Result<SyncSummary> {
    Syncer::new(state, writer).sync(config)
}

/// Check the text after the last `.` of the whole path against the synced extensions
pub fn has_supported_extension(path: &Path) -> bool {
    path.to_string_lossy()
        .rsplit('.')
        .next()
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Immediate children of a directory, in listing order
pub(crate) fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let context = || format!("Failed to list directory '{}'", dir.display());

    let mut children = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(context)? {
        children.push(dir.join(entry.with_context(context)?.file_name()));
    }
    Ok(children)
}

fn with_trailing_separator(dir: &Path) -> String {
    let text = dir.display().to_string();
    if text.ends_with(MAIN_SEPARATOR) {
        text
    } else {
        format!("{text}{MAIN_SEPARATOR}")
    }
}
