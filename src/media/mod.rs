//! Media classification by file extension
//!
//! Only the extension is inspected; content is never opened. [`is_image`] and
//! [`is_video`] additionally require the path to be an existing regular file.

use std::fmt;
use std::path::Path;

/// Recognized image extensions (lowercase)
pub const IMAGE_EXTENSIONS: &[&str] = &["bmp", "jpeg", "jpg", "png", "tif", "tiff", "webp"];
/// Recognized video extensions (lowercase)
pub const VIDEO_EXTENSIONS: &[&str] =
    &["avi", "m4v", "mkv", "mov", "mp4", "mpeg", "mpg", "webm", "wmv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a path by its extension, case-insensitively
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Tag stored in the history `type` field
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_image(path: &Path) -> bool {
    path.is_file() && MediaKind::from_path(path) == Some(MediaKind::Image)
}

pub fn is_video(path: &Path) -> bool {
    path.is_file() && MediaKind::from_path(path) == Some(MediaKind::Video)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_from_path_image() {
        assert_eq!(MediaKind::from_path(Path::new("/a/face.jpg")), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path(Path::new("/a/face.PNG")), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_path(Path::new("scan.tiff")), Some(MediaKind::Image));
    }

    #[test]
    fn test_from_path_video() {
        assert_eq!(MediaKind::from_path(Path::new("/a/clip.mp4")), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_path(Path::new("/a/clip.MoV")), Some(MediaKind::Video));
    }

    #[test]
    fn test_from_path_unknown() {
        assert_eq!(MediaKind::from_path(Path::new("/a/notes.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("/a/no_extension")), None);
        assert_eq!(MediaKind::from_path(Path::new("/a/.jpg")), None);
    }

    #[test]
    fn test_is_image_requires_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("face.jpg");
        fs::write(&existing, b"jpg").unwrap();

        assert!(is_image(&existing));
        assert!(!is_image(&temp_dir.path().join("missing.jpg")));
        assert!(!is_video(&existing));
    }

    #[test]
    fn test_is_video_requires_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("clip.webm");
        fs::write(&existing, b"webm").unwrap();

        assert!(is_video(&existing));
        assert!(!is_video(&PathBuf::from("/definitely/missing/clip.webm")));
    }

    #[test]
    fn test_directory_with_media_extension_is_not_media() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("album.jpg");
        fs::create_dir(&dir).unwrap();

        assert!(!is_image(&dir));
    }

    #[test]
    fn test_display_matches_history_tag() {
        assert_eq!(MediaKind::Image.to_string(), "image");
        assert_eq!(MediaKind::Video.to_string(), "video");
    }
}
