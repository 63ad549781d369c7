use std::env;
use std::path::PathBuf;

/// Environment variable overriding the scratch-directory root
pub const TEMP_PATH_ENV: &str = "FILE_HISTORY_TEMP_PATH";

/// Resolve the scratch-directory root
///
/// Order: the explicit value, then `FILE_HISTORY_TEMP_PATH` (ignored when empty),
/// then the platform temporary directory.
pub fn resolve_temp_path(explicit: Option<PathBuf>) -> PathBuf {
    resolve_temp_path_internal(explicit, env::var(TEMP_PATH_ENV).ok())
}

pub(crate) fn resolve_temp_path_internal(
    explicit: Option<PathBuf>,
    from_env: Option<String>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    match from_env {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => env::temp_dir(),
    }
}
