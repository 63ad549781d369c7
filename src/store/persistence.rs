//! History file persistence: lenient loads, atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::{HISTORY_FILE_NAME, HistoryConfig};
use crate::models::HistoryDocument;

/// Get the history directory, creating it (and its parents) if missing
pub fn get_history_dir(config: &HistoryConfig) -> Result<PathBuf> {
    let history_dir = config.history_dir();

    fs::create_dir_all(&history_dir).with_context(|| {
        format!("Failed to create history directory: {}", history_dir.display())
    })?;

    Ok(history_dir)
}

/// Get path to the history file
pub fn get_history_file_path(config: &HistoryConfig) -> Result<PathBuf> {
    Ok(get_history_dir(config)?.join(HISTORY_FILE_NAME))
}

/// Load the document stored at `path`
///
/// A missing, unreadable or malformed file yields an empty document. Corruption is
/// logged and never reported to the caller; the next save overwrites it.
pub fn load_document(path: &Path) -> HistoryDocument {
    if !path.is_file() {
        return HistoryDocument::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Unreadable history file, starting empty");
            return HistoryDocument::default();
        }
    };

    match serde_json::from_str::<HistoryDocument>(&content) {
        Ok(document) => document,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Malformed history file, starting empty");
            HistoryDocument::default()
        }
    }
}

/// Replace the file at `path` with `document` (temp file + rename)
pub fn save_document(path: &Path, document: &HistoryDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document).context("Failed to serialize history")?;

    let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or(HISTORY_FILE_NAME);
    let temp_path = path.with_file_name(format!("{}.tmp", file_name));

    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write history temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace history file: {}", path.display()))?;

    Ok(())
}
