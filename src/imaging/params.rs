//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! [`operations`](super::operations), which decides the target size, and the
//! [`backend`](super::backend), which does the pixel work.
//!
//! ## Types
//!
//! - [`Quality`]: JPEG encoding quality (1–100, default 75). Clamped on construction.
//! - [`ImageFormat`]: Input formats the header readers understand, detected by extension.
//! - [`ResizeParams`]: Full specification for a resize: source, output path, target width, quality.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Quality setting for JPEG encoding (1-100).
///
/// Only [`Quality::new`] builds one, so the value is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// Input image formats with a header reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }
}

/// Parameters for a resize-and-encode operation. Output is always JPEG.
///
/// Only the width is fixed here. The backend derives the height from the
/// decoded pixels, so a misread header cannot change the output's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Target width; 0 keeps the decoded width.
    pub width: u32,
    pub quality: Quality,
}
