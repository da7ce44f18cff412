//! High-level image operations.
//!
//! These functions combine configuration with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend, ResizeOutput};
use super::params::{Quality, ResizeParams};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Configuration for a width-driven resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeConfig {
    /// Output width; 0 keeps the native width.
    pub width: u32,
    pub quality: Quality,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: 500,
            quality: Quality::default(),
        }
    }
}

/// Plan a resize operation without executing it.
pub fn plan_resize(source: &Path, output_path: &Path, config: &ResizeConfig) -> ResizeParams {
    ResizeParams {
        source: source.to_path_buf(),
        output: output_path.to_path_buf(),
        width: config.width,
        quality: config.quality,
    }
}

/// Resize one image to a JPEG at `output_path`.
///
/// Returns the decoded source size and the size that was written.
pub fn resize_image(
    backend: &impl ImageBackend,
    source: &Path,
    output_path: &Path,
    config: &ResizeConfig,
) -> Result<ResizeOutput> {
    let params = plan_resize(source, output_path, config);
    backend.resize(&params)
}
