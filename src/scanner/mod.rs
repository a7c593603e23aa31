//! Media directory scanner.
//!
//! Walks a directory for video files and identifies each one in turn. A file
//! that fails to identify is reported alongside the others rather than
//! aborting the scan.

pub mod identifier;

use reelmatch_common::{paths::is_video_file, MediaType};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub use identifier::{EpisodeDetails, Identification, MediaIdentifier};

/// Outcome of identifying one file during a scan.
#[derive(Debug)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub result: reelmatch_common::Result<Identification>,
}

/// Scanner for identifying every video file under a directory.
pub struct Scanner {
    identifier: MediaIdentifier,
}

impl Scanner {
    pub fn new(identifier: MediaIdentifier) -> Self {
        Self { identifier }
    }

    /// Identify every video file under `path`, in path order.
    pub async fn scan_directory(
        &self,
        path: &Path,
        media_type: MediaType,
    ) -> anyhow::Result<Vec<ScanEntry>> {
        if !path.is_dir() {
            anyhow::bail!("Not a directory: {:?}", path);
        }

        info!("Scanning directory: {:?}", path);
        let files = find_video_files(path);
        let mut entries = Vec::with_capacity(files.len());

        for file in files {
            debug!("Identifying file: {:?}", file);
            let result = self
                .identifier
                .identify(&file.to_string_lossy(), media_type, None)
                .await;

            if let Err(e) = &result {
                warn!("Failed to identify {:?}: {}", file, e);
            }
            entries.push(ScanEntry { path: file, result });
        }

        let matched = entries.iter().filter(|e| e.result.is_ok()).count();
        info!(
            "Scan complete: {} of {} files identified in {:?}",
            matched,
            entries.len(),
            path
        );
        Ok(entries)
    }
}

/// All video files below `root`, sorted by path.
pub fn find_video_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_video_file(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
