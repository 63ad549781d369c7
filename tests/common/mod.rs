//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use file_history::{Entry, HistoryConfig, HistoryDocument, HistoryStore};
use tempfile::TempDir;

/// Temp workspace holding a scratch root and a directory of media files
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("media")).expect("Failed to create media dir");
        Self { temp_dir }
    }

    /// Scratch root passed to the store
    pub fn scratch_root(&self) -> PathBuf {
        self.temp_dir.path().join("scratch")
    }

    pub fn store(&self) -> HistoryStore {
        HistoryStore::new(HistoryConfig::new(self.scratch_root()))
    }

    pub fn history_file(&self) -> PathBuf {
        self.scratch_root().join("facefusion").join("history").join("file_history.json")
    }

    /// Create a media file with placeholder content and return its path
    pub fn media_file(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join("media").join(name);
        fs::write(&path, b"not really media").expect("Failed to write media file");
        path
    }

    /// A path inside the workspace that does not exist
    pub fn missing_file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join("media").join(name)
    }

    /// Write raw content to the history file, bypassing the store
    pub fn with_history_content(self, content: &str) -> Self {
        let path = self.history_file();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create history dir");
        fs::write(&path, content).expect("Failed to write history file");
        self
    }

    pub fn read_history_content(&self) -> String {
        fs::read_to_string(self.history_file()).expect("Failed to read history file")
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// `count` fake image entries `/test/path{i}.jpg` with timestamp `i`
pub fn fake_entries(count: usize) -> Vec<Entry> {
    (0..count).map(|i| Entry::new(format!("/test/path{}.jpg", i), "image", i as i64)).collect()
}

pub fn document_with_sources(entries: Vec<Entry>) -> HistoryDocument {
    HistoryDocument { source_files: entries, target_files: Vec::new() }
}
