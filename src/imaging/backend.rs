//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the batch driver
//! needs: identify and resize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate with the header readers from [`header`](super::header) in front of it.

use super::params::ResizeParams;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Width and height of an image in pixels.
///
/// `(0, 0)` is the "unknown" sentinel returned by the header readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const UNKNOWN: Self = Self {
        width: 0,
        height: 0,
    };

    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// True when either side is zero. Such a size cannot be resized or
    /// encoded, so callers treat it like the unknown sentinel.
    pub fn has_zero_side(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Sizes reported by a completed resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOutput {
    /// Size of the decoded source image.
    pub original: Dimensions,
    /// Size that was written.
    pub resized: Dimensions,
}

/// Trait for image processing backends.
///
/// `Sync` so a backend can be shared by reference across threads.
pub trait ImageBackend: Sync {
    /// Get native image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode the source, resize it to the requested width and write it as
    /// JPEG. The height follows the aspect ratio of the decoded pixels.
    fn resize(&self, params: &ResizeParams) -> Result<ResizeOutput, BackendError>;
}
