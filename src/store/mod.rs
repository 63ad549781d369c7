//! Persistent MRU history of source and target files
//!
//! The document lives in a single JSON file:
//! `<scratch_root>/facefusion/history/file_history.json`
//!
//! - Missing or corrupt files load as an empty document
//! - Writes go through a temp file and a rename
//! - Each list holds at most 20 entries after a new path is added

pub mod history;
pub mod persistence;

pub use history::{HistoryStore, UpsertOutcome, promote_or_insert};
pub use persistence::{get_history_dir, get_history_file_path, load_document, save_document};
