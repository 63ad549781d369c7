use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// A single record in a history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Seconds since the Unix epoch at first insertion
    #[serde(rename = "timestamp")]
    pub added_at: i64,
}

impl Entry {
    pub fn new(path: impl Into<String>, kind: impl Into<String>, added_at: i64) -> Self {
        Self { path: path.into(), kind: kind.into(), added_at }
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }
}

/// The persisted history document: two independent MRU lists, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default)]
    pub source_files: Vec<Entry>,
    #[serde(default)]
    pub target_files: Vec<Entry>,
}

impl HistoryDocument {
    pub fn list(&self, list: HistoryList) -> &[Entry] {
        match list {
            HistoryList::Source => &self.source_files,
            HistoryList::Target => &self.target_files,
        }
    }

    pub fn list_mut(&mut self, list: HistoryList) -> &mut Vec<Entry> {
        match list {
            HistoryList::Source => &mut self.source_files,
            HistoryList::Target => &mut self.target_files,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.source_files.is_empty() && self.target_files.is_empty()
    }
}

/// Names one of the two history lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryList {
    Source,
    Target,
}

impl HistoryList {
    /// Field name of the list in the persisted document
    pub fn key(self) -> &'static str {
        match self {
            HistoryList::Source => "source_files",
            HistoryList::Target => "target_files",
        }
    }
}

impl fmt::Display for HistoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryList::Source => write!(f, "source"),
            HistoryList::Target => write!(f, "target"),
        }
    }
}

impl FromStr for HistoryList {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" | "source_files" => Ok(HistoryList::Source),
            "target" | "target_files" => Ok(HistoryList::Target),
            other => bail!("Unknown history list '{}' (expected 'source' or 'target')", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_uses_persisted_field_names() {
        let entry = Entry::new("/test/path1.jpg", "image", 123456789);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["path"], "/test/path1.jpg");
        assert_eq!(value["type"], "image");
        assert_eq!(value["timestamp"], 123456789);
        assert!(value.get("kind").is_none());
        assert!(value.get("added_at").is_none());
    }

    #[test]
    fn test_document_missing_list_defaults_to_empty() {
        let json = r#"{"source_files": [{"path": "/a.jpg", "type": "image", "timestamp": 1}]}"#;
        let document: HistoryDocument = serde_json::from_str(json).unwrap();

        assert_eq!(document.source_files.len(), 1);
        assert!(document.target_files.is_empty());
    }

    #[test]
    fn test_document_accepts_compact_encoding() {
        let json =
            r#"{"source_files":[],"target_files":[{"path":"/b.mp4","type":"video","timestamp":42}]}"#;
        let document: HistoryDocument = serde_json::from_str(json).unwrap();

        assert_eq!(document.target_files, vec![Entry::new("/b.mp4", "video", 42)]);
    }

    #[test]
    fn test_list_accessors() {
        let mut document = HistoryDocument::default();
        assert!(document.is_empty());

        document.list_mut(HistoryList::Target).push(Entry::new("/b.mp4", "video", 1));

        assert!(document.list(HistoryList::Source).is_empty());
        assert_eq!(document.list(HistoryList::Target).len(), 1);
        assert!(!document.is_empty());
    }

    #[test]
    fn test_history_list_from_str() {
        assert_eq!("source".parse::<HistoryList>().unwrap(), HistoryList::Source);
        assert_eq!("Target".parse::<HistoryList>().unwrap(), HistoryList::Target);
        assert_eq!("source_files".parse::<HistoryList>().unwrap(), HistoryList::Source);
        assert!("output".parse::<HistoryList>().is_err());
    }

    #[test]
    fn test_history_list_key() {
        assert_eq!(HistoryList::Source.key(), "source_files");
        assert_eq!(HistoryList::Target.key(), "target_files");
    }
}
