//! Startup configuration for the history store
//!
//! The scratch root is resolved once when the process starts and handed to
//! [`crate::store::HistoryStore::new`]; nothing below re-reads the environment.

use std::path::{Path, PathBuf};

use crate::utils::environment::resolve_temp_path;

/// Namespace directory created under the scratch root
pub const APP_NAMESPACE: &str = "facefusion";
/// Subdirectory of the namespace holding the history file
pub const HISTORY_DIR_NAME: &str = "history";
/// File name of the persisted history document
pub const HISTORY_FILE_NAME: &str = "file_history.json";
/// Maximum number of entries kept per list when a new path is added
pub const HISTORY_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    pub scratch_root: PathBuf,
    pub namespace: String,
}

impl HistoryConfig {
    pub fn new(scratch_root: impl Into<PathBuf>) -> Self {
        Self { scratch_root: scratch_root.into(), namespace: APP_NAMESPACE.to_string() }
    }

    /// Resolve from an explicit path, else the environment, else the platform temp dir
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::new(resolve_temp_path(explicit))
    }

    /// `<scratch_root>/<namespace>/history`
    pub fn history_dir(&self) -> PathBuf {
        self.scratch_root.join(&self.namespace).join(HISTORY_DIR_NAME)
    }

    pub fn scratch_root(&self) -> &Path {
        &self.scratch_root
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}
