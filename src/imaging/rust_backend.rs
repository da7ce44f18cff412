//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | [`header`](super::header) readers, falling back to `ImageReader::into_dimensions` |
//! | Decode (JPEG, PNG) | `image::ImageReader` |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend, ResizeOutput};
use super::calculations::calculate_target_dimensions;
use super::header;
use super::params::{ImageFormat, ResizeParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;
use tracing::debug;

/// Extensions the backend accepts as input.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Returns the set of image file extensions the backend can read.
pub fn supported_input_extensions() -> &'static [&'static str] {
    SUPPORTED_EXTENSIONS
}

/// Backend using the header readers plus the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Encode as baseline JPEG. Alpha is dropped since JPEG cannot carry it.
fn save_jpeg(img: &DynamicImage, path: &Path, quality: u8) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality);
    DynamicImage::ImageRgb8(img.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        if let Some(format) = ImageFormat::from_path(path) {
            let bytes = std::fs::read(path)?;
            let dims = header::read_dimensions(format, &bytes);
            if !dims.has_zero_side() {
                return Ok(dims);
            }
            if dims.is_unknown() {
                debug!(path = %path.display(), "header unreadable, falling back to decoder");
            } else {
                debug!(
                    path = %path.display(),
                    width = dims.width,
                    height = dims.height,
                    "header has a zero side, falling back to decoder"
                );
            }
        }

        // Guess from content: the extension may not match what is in the file.
        let (width, height) = ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
            })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<ResizeOutput, BackendError> {
        let img = load_image(&params.source)?;
        let native = (img.width(), img.height());
        let (width, height) = calculate_target_dimensions(native, params.width);
        let resized = if (width, height) == native {
            img
        } else {
            img.resize_exact(width, height, FilterType::Lanczos3)
        };
        save_jpeg(&resized, &params.output, params.quality.value())?;
        Ok(ResizeOutput {
            original: Dimensions {
                width: native.0,
                height: native.1,
            },
            resized: Dimensions { width, height },
        })
    }
}
