//! Image processing: header readers plus the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | custom header readers (JPEG SOF scan, PNG IHDR), `image` fallback |
//! | **Resize** | Lanczos3 via `image` |
//! | **Encode** | `image::codecs::jpeg::JpegEncoder` |
//!
//! The module is split into:
//! - **Header**: Byte-level dimension readers (pure, no I/O)
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining configuration + backend

pub mod backend;
mod calculations;
pub mod header;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, ResizeOutput};
pub use calculations::calculate_target_dimensions;
pub use header::{jpeg_dimensions, png_dimensions, read_dimensions};
pub use operations::{ResizeConfig, plan_resize, resize_image};
pub use params::{ImageFormat, Quality, ResizeParams};
pub use rust_backend::{RustBackend, supported_input_extensions};
