//! Path utilities for detecting video files and extracting basenames.
//!
//! Used by the CLI scanner to pick files worth identifying and by the matcher
//! to attach the input's basename to a decision.

use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "ts", "webm", "mov", "wmv", "flv", "mpg", "mpeg",
];

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use reelmatch_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.mkv")));
/// assert!(is_video_file(Path::new("/path/to/video.MP4")));
/// assert!(!is_video_file(Path::new("subtitle.srt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Final path component of `path`, or the whole input when it has none.
///
/// # Examples
///
/// ```
/// use reelmatch_common::paths::file_name;
///
/// assert_eq!(file_name("/tv/Show.S01E01.mkv"), "Show.S01E01.mkv");
/// assert_eq!(file_name("Show.S01E01.mkv"), "Show.S01E01.mkv");
/// ```
pub fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
