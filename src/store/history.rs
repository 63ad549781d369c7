//! The MRU history store
//!
//! Every mutation is a full read-modify-write of the backing file. There is no
//! locking: two processes sharing a scratch root race and the last writer wins.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use tracing::debug;

use super::persistence::{get_history_file_path, load_document, save_document};
use crate::config::{HISTORY_CAPACITY, HistoryConfig};
use crate::models::{Entry, HistoryDocument, HistoryList};

/// What an [`HistoryStore::upsert`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The path is not an existing file; nothing was read or written
    Skipped,
    /// The path was already listed and moved to the front as-is
    Promoted,
    /// A new entry was inserted at the front
    Inserted,
}

/// Move `path` to the front of `entries`, or insert a new entry there
///
/// Promotion keeps the existing entry untouched (timestamp and kind included) and
/// never trims. Only a new insertion truncates the list to [`HISTORY_CAPACITY`], so a
/// list that was grown past capacity by hand shrinks on the next new path.
pub fn promote_or_insert(
    entries: &mut Vec<Entry>,
    path: &str,
    kind: &str,
    now: i64,
) -> UpsertOutcome {
    if let Some(position) = entries.iter().position(|entry| entry.path == path) {
        let entry = entries.remove(position);
        entries.insert(0, entry);
        return UpsertOutcome::Promoted;
    }

    entries.insert(0, Entry::new(path, kind, now));
    entries.truncate(HISTORY_CAPACITY);
    UpsertOutcome::Inserted
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    config: HistoryConfig,
}

impl HistoryStore {
    pub fn new(config: HistoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Location of the backing file; creates the history directory if needed
    pub fn history_file_path(&self) -> Result<PathBuf> {
        get_history_file_path(&self.config)
    }

    /// Load the document, falling back to an empty one when the file is missing or corrupt
    ///
    /// Lists are returned as stored, even when longer than the capacity.
    pub fn load(&self) -> Result<HistoryDocument> {
        Ok(load_document(&self.history_file_path()?))
    }

    pub fn save(&self, document: &HistoryDocument) -> Result<()> {
        save_document(&self.history_file_path()?, document)
    }

    /// Record `path` as the most recent entry of `list`
    ///
    /// Silently skipped when `path` is not an existing file.
    pub fn upsert(&self, list: HistoryList, path: &Path, kind: &str) -> Result<UpsertOutcome> {
        self.upsert_at(list, path, kind, Utc::now().timestamp())
    }

    pub(crate) fn upsert_at(
        &self,
        list: HistoryList,
        path: &Path,
        kind: &str,
        now: i64,
    ) -> Result<UpsertOutcome> {
        if !path.is_file() {
            debug!(list = %list, path = %path.display(), "Not a file, history left unchanged");
            return Ok(UpsertOutcome::Skipped);
        }

        let mut document = self.load()?;
        let path = path.to_string_lossy();
        let outcome = promote_or_insert(document.list_mut(list), &path, kind, now);
        debug!(list = %list, path = %path, ?outcome, "Updated file history");

        self.save(&document)?;
        Ok(outcome)
    }

    pub fn add_source_file(&self, path: &Path, kind: &str) -> Result<UpsertOutcome> {
        self.upsert(HistoryList::Source, path, kind)
    }

    pub fn add_target_file(&self, path: &Path, kind: &str) -> Result<UpsertOutcome> {
        self.upsert(HistoryList::Target, path, kind)
    }

    /// Entries of `list` as stored, stale paths included
    pub fn read(&self, list: HistoryList) -> Result<Vec<Entry>> {
        let mut document = self.load()?;
        Ok(std::mem::take(document.list_mut(list)))
    }

    pub fn source_files(&self) -> Result<Vec<Entry>> {
        self.read(HistoryList::Source)
    }

    pub fn target_files(&self) -> Result<Vec<Entry>> {
        self.read(HistoryList::Target)
    }

    /// Overwrite the backing file with an empty document
    pub fn clear(&self) -> Result<()> {
        self.save(&HistoryDocument::default())
    }
}
