//! File History - recently used source and target media files
//!
//! This library keeps two most-recently-used lists for a face-swapping tool:
//!
//! - `source_files`: images providing the face
//! - `target_files`: images or videos the face is applied to
//!
//! Both lists live in one JSON file under the scratch directory, are capped at 20
//! entries and are deduplicated by path. A gallery picker builds displayable views
//! on top of the store.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use file_history::{HistoryConfig, HistoryStore};
//!
//! let store = HistoryStore::new(HistoryConfig::resolve(None));
//! store.add_source_file(Path::new("/home/alice/face.jpg"), "image")?;
//! for entry in store.source_files()? {
//!     println!("{} ({})", entry.path, entry.kind);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod media;
pub mod models;
pub mod picker;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::{HISTORY_CAPACITY, HistoryConfig};
pub use media::{MediaKind, is_image, is_video};
pub use models::{Entry, HistoryDocument, HistoryList};
pub use picker::{PickerState, Selection};
pub use store::{HistoryStore, UpsertOutcome};
pub use utils::format_path_with_tilde;
