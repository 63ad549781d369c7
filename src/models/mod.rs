//! Data models for the file history document.
//!
//! - [`HistoryDocument`] - The persisted document holding both lists
//! - [`Entry`] - One recently used file
//! - [`HistoryList`] - Selects the source or target list
//!
//! Field names follow the on-disk JSON format (`type`, `timestamp`) via serde renames.

pub mod history;

pub use history::{Entry, HistoryDocument, HistoryList};
