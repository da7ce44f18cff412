//! Output path convention.
//!
//! A resized copy lands in a subdirectory next to its source, keeping the
//! source file name unchanged (extension included):
//!
//! ```text
//! photos/trip/beach.png  →  photos/trip/data/beach.png
//! ```
//!
//! The content is always JPEG, whatever the extension says.

use std::path::{Path, PathBuf};

/// Default name of the per-directory output folder.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "data";

/// Derive the output path for `source` inside `dir_name`.
///
/// Returns `None` when `source` has no file name (e.g. `..` or `/`).
pub fn output_path(source: &Path, dir_name: &str) -> Option<PathBuf> {
    let file_name = source.file_name()?;
    let parent = source.parent().unwrap_or_else(|| Path::new(""));
    Some(parent.join(dir_name).join(file_name))
}

/// Whether `path` is a directory entry produced by this tool, i.e. its
/// final component equals `dir_name`.
pub fn is_output_dir(path: &Path, dir_name: &str) -> bool {
    path.file_name().is_some_and(|name| name == dir_name)
}
