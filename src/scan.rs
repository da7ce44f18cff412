//! Source directory discovery.
//!
//! Walks the source directory recursively and lists every regular file,
//! tagged with the [`ImageFormat`] its extension maps to (or `None` for files
//! the tool does not handle).
//!
//! ```text
//! photos/                # Source root
//! ├── config.toml        # Optional settings (not an image → skipped)
//! ├── beach.jpg          # → photos/data/beach.jpg
//! ├── trip/
//! │   ├── map.png        # → photos/trip/data/map.png
//! │   └── data/          # Output of an earlier run, never descended into
//! │       └── map.png
//! └── data/
//!     └── beach.jpg
//! ```
//!
//! Entries are sorted by file name so runs are deterministic. Entries the walk
//! cannot read (a locked subdirectory, a file removed mid-walk) are collected
//! as [`UnreadableEntry`] values and the walk goes on.

use crate::imaging::ImageFormat;
use crate::naming;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),
}

/// A file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// `None` when the extension is not a supported image type.
    pub format: Option<ImageFormat>,
}

/// A directory entry the walk failed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableEntry {
    pub path: PathBuf,
    pub error: String,
}

/// Result of walking the source root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scan {
    pub files: Vec<ScannedFile>,
    pub unreadable: Vec<UnreadableEntry>,
}

/// List all files under `root`, skipping directories named `output_dir_name`.
///
/// Only a missing root is an error.
pub fn scan(root: &Path, output_dir_name: &str) -> Result<Scan, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::SourceNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir()
                    && naming::is_output_dir(entry.path(), output_dir_name))
        });

    Ok(collect_entries(walker, root))
}

fn collect_entries(
    entries: impl IntoIterator<Item = walkdir::Result<DirEntry>>,
    root: &Path,
) -> Scan {
    let mut scan = Scan::default();
    for entry in entries {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.into_path();
                let format = ImageFormat::from_path(&path);
                debug!(path = %path.display(), format = ?format, "found file");
                scan.files.push(ScannedFile { path, format });
            }
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                scan.unreadable.push(UnreadableEntry {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }
    scan
}
