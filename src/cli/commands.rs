use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::config::HistoryConfig;
use crate::media::MediaKind;
use crate::models::{Entry, HistoryList};
use crate::picker::PickerState;
use crate::store::{HistoryStore, UpsertOutcome};
use crate::utils::{TEMP_PATH_ENV, absolute_path, format_path_with_tilde, format_timestamp};

#[derive(Parser)]
#[command(name = "file-history")]
#[command(version = "0.1.0")]
#[command(about = "Track recently used source and target media files", long_about = None)]
pub struct Cli {
    /// Scratch directory root (defaults to the platform temp directory)
    #[arg(long, global = true, env = TEMP_PATH_ENV, value_name = "DIR")]
    pub temp_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a source file (the face to use)
    AddSource {
        path: PathBuf,
        /// Kind tag stored with the entry (defaults to the detected media kind)
        #[arg(long)]
        kind: Option<String>,
    },
    /// Record a target file (the image or video to process)
    AddTarget {
        path: PathBuf,
        #[arg(long)]
        kind: Option<String>,
    },
    /// List a history, most recent first
    List {
        /// `source` or `target`
        list: HistoryList,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
        /// Include entries whose files are missing or not displayable
        #[arg(long)]
        all: bool,
    },
    /// Pick an entry by index and move it to the top of its history
    Select { list: HistoryList, index: usize },
    /// Remove all entries from both histories
    Clear,
    /// Print the location of the history file
    Path,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = HistoryStore::new(HistoryConfig::resolve(cli.temp_path));

    match cli.command {
        Some(Commands::AddSource { path, kind }) => {
            add_file(&store, HistoryList::Source, &path, kind)?;
        }
        Some(Commands::AddTarget { path, kind }) => {
            add_file(&store, HistoryList::Target, &path, kind)?;
        }
        Some(Commands::List { list, json, all }) => {
            list_files(store, list, json, all)?;
        }
        Some(Commands::Select { list, index }) => {
            select_file(store, list, index)?;
        }
        Some(Commands::Clear) => {
            store.clear()?;
            println!("History cleared");
        }
        Some(Commands::Path) => {
            println!("{}", store.history_file_path()?.display());
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Kind used when none is given: the detected media kind, else the list's usual kind
fn default_kind(list: HistoryList, path: &Path) -> String {
    match (MediaKind::from_path(path), list) {
        (Some(kind), _) => kind.to_string(),
        (None, HistoryList::Source) => MediaKind::Image.to_string(),
        (None, HistoryList::Target) => MediaKind::Video.to_string(),
    }
}

fn add_file(
    store: &HistoryStore,
    list: HistoryList,
    path: &Path,
    kind: Option<String>,
) -> Result<()> {
    let path = absolute_path(path)?;
    let kind = kind.unwrap_or_else(|| default_kind(list, &path));

    match store.upsert(list, &path, &kind)? {
        UpsertOutcome::Inserted => println!("Added {} file: {}", list, path.display()),
        UpsertOutcome::Promoted => println!("Moved to top of {} history: {}", list, path.display()),
        UpsertOutcome::Skipped => println!("Skipped: {} is not a file", path.display()),
    }

    Ok(())
}

fn list_files(store: HistoryStore, list: HistoryList, json: bool, all: bool) -> Result<()> {
    let indexed: Vec<(usize, Entry)> = if all {
        store.read(list)?.into_iter().enumerate().collect()
    } else {
        PickerState::new(store).gallery_indexed(list)?
    };

    if json {
        let entries: Vec<&Entry> = indexed.iter().map(|(_, entry)| entry).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if indexed.is_empty() {
        println!("No {} files in history", list);
        return Ok(());
    }

    for (index, entry) in &indexed {
        println!(
            "{:>2}  {:<5}  {:>12}  {}",
            index,
            entry.kind,
            format_timestamp(entry.added_at),
            format_path_with_tilde(entry.as_path())
        );
    }

    Ok(())
}

fn select_file(store: HistoryStore, list: HistoryList, index: usize) -> Result<()> {
    let mut picker = PickerState::new(store);

    let Some(selection) = picker.select(list, Some(index))? else {
        bail!("No selectable {} file at index {}", list, index);
    };

    println!("{}", selection.entry.path);
    if selection.clear_face_caches {
        println!("Target changed: cached faces should be cleared");
    }

    Ok(())
}
