//! Gallery picker over the file history
//!
//! [`PickerState`] is owned by whatever renders the galleries and is passed to its
//! event handlers. It keeps the current source/target selection next to the store
//! instead of in process-wide handles.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::media::{is_image, is_video};
use crate::models::{Entry, HistoryList};
use crate::store::HistoryStore;

/// Result of picking an entry from a gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub list: HistoryList,
    pub entry: Entry,
    /// Set for target selections: cached reference and static faces belong to the
    /// previous target and must be dropped by the caller
    pub clear_face_caches: bool,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    store: HistoryStore,
    source_paths: Vec<PathBuf>,
    target_path: Option<PathBuf>,
}

impl PickerState {
    pub fn new(store: HistoryStore) -> Self {
        Self { store, source_paths: Vec::new(), target_path: None }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn source_paths(&self) -> &[PathBuf] {
        &self.source_paths
    }

    pub fn target_path(&self) -> Option<&PathBuf> {
        self.target_path.as_ref()
    }

    /// Entries currently displayable in the gallery for `list`
    ///
    /// Source galleries show existing images; target galleries show existing images and videos.
    pub fn gallery(&self, list: HistoryList) -> Result<Vec<Entry>> {
        Ok(self.gallery_indexed(list)?.into_iter().map(|(_, entry)| entry).collect())
    }

    /// Like [`Self::gallery`], paired with each entry's index in the stored list
    pub fn gallery_indexed(&self, list: HistoryList) -> Result<Vec<(usize, Entry)>> {
        let entries = self.store.read(list)?;

        Ok(entries
            .into_iter()
            .enumerate()
            .filter(|(_, entry)| is_displayable(list, entry))
            .collect())
    }

    /// Pick the entry at `index` and promote it to the front of its list
    ///
    /// `index` refers to the stored list, not the filtered gallery. Returns `None`
    /// when nothing is selected, the index is out of range, or a source entry is no
    /// longer an existing image.
    pub fn select(&mut self, list: HistoryList, index: Option<usize>) -> Result<Option<Selection>> {
        let Some(index) = index else {
            return Ok(None);
        };

        let entries = self.store.read(list)?;
        let Some(entry) = entries.into_iter().nth(index) else {
            debug!(list = %list, index, "Selection index out of range");
            return Ok(None);
        };

        let path = entry.as_path().to_path_buf();
        let clear_face_caches = match list {
            HistoryList::Source => {
                if !is_image(&path) {
                    debug!(path = %path.display(), "Selected source is not an existing image");
                    return Ok(None);
                }
                self.source_paths = vec![path.clone()];
                false
            }
            HistoryList::Target => {
                self.target_path = Some(path.clone());
                true
            }
        };

        self.store.upsert(list, &path, &entry.kind)?;

        Ok(Some(Selection { list, entry, clear_face_caches }))
    }

    /// Empty both history lists; current selections are kept
    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}

fn is_displayable(list: HistoryList, entry: &Entry) -> bool {
    let path = entry.as_path();
    match list {
        HistoryList::Source => is_image(path),
        HistoryList::Target => is_image(path) || is_video(path),
    }
}
