use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Make `path` absolute against the current directory without touching the filesystem
///
/// History entries are keyed by absolute path, so relative CLI arguments are
/// resolved before they reach the store.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("Failed to resolve absolute path: {}", path.display()))
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use file_history::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Pictures/face.jpg");
/// // Returns "~/Pictures/face.jpg" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.to_string_lossy());
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
