//! Shared test utilities: synthetic images written with the `image` encoders.

use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use std::path::Path;

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
}

/// Create a small valid baseline JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a small valid RGBA PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, 64, (y % 256) as u8, 200])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
        .unwrap();
}

/// Create a baseline JPEG with a COM segment holding `comment` right after SOI.
pub fn create_test_jpeg_with_comment(path: &Path, width: u32, height: u32, comment: &[u8]) {
    create_test_jpeg(path, width, height);
    let encoded = std::fs::read(path).unwrap();
    let length = u16::try_from(comment.len() + 2).unwrap();

    let mut bytes = Vec::with_capacity(encoded.len() + comment.len() + 4);
    bytes.extend_from_slice(&encoded[..2]);
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    bytes.extend_from_slice(&length.to_be_bytes());
    bytes.extend_from_slice(comment);
    bytes.extend_from_slice(&encoded[2..]);
    std::fs::write(path, bytes).unwrap();
}
