//! End-to-end batch runs over real JPEG/PNG files in a temp directory.
//!
//! Exercises the library with the real `RustBackend`: scan → identify via the
//! header readers → Lanczos3 resize → JPEG encode → `data/` output.

use image::{ExtendedColorType, ImageEncoder, RgbImage};
use imgshrink::config;
use imgshrink::imaging::{Quality, ResizeConfig, jpeg_dimensions, png_dimensions};
use imgshrink::process::{self, FileOutcome, ProcessOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 90])
    })
}

fn write_jpeg(path: &Path, width: u32, height: u32) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let writer = std::io::BufWriter::new(fs::File::create(path).unwrap());
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(gradient(width, height).as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

fn write_png(path: &Path, width: u32, height: u32) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let writer = std::io::BufWriter::new(fs::File::create(path).unwrap());
    image::codecs::png::PngEncoder::new(writer)
        .write_image(gradient(width, height).as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Insert a COM segment right after SOI.
fn insert_comment(path: &Path, comment: &[u8]) {
    let encoded = fs::read(path).unwrap();
    let length = u16::try_from(comment.len() + 2).unwrap();
    let mut bytes = encoded[..2].to_vec();
    bytes.extend_from_slice(&[0xFF, 0xFE]);
    bytes.extend_from_slice(&length.to_be_bytes());
    bytes.extend_from_slice(comment);
    bytes.extend_from_slice(&encoded[2..]);
    fs::write(path, bytes).unwrap();
}

fn output_jpeg_dims(path: &Path) -> (u32, u32) {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8], "{} is not a JPEG", path.display());
    let dims = jpeg_dimensions(&bytes);
    (dims.width, dims.height)
}

#[test]
fn resizes_tree_into_sibling_data_dirs() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_jpeg(&root.join("beach.jpg"), 1000, 750);
    write_png(&root.join("trip/map.png"), 250, 100);
    fs::write(root.join("trip/notes.txt"), "not an image").unwrap();

    let report = process::process(root, &ProcessOptions::default(), None).unwrap();

    assert_eq!(report.files.len(), 3);
    assert_eq!(report.resized(), 2);
    assert_eq!(report.skipped(), 1);
    assert!(!report.has_failures());

    assert_eq!(output_jpeg_dims(&root.join("data/beach.jpg")), (500, 375));
    // PNG sources keep their name but hold JPEG data; upscaling is allowed.
    assert_eq!(output_jpeg_dims(&root.join("trip/data/map.png")), (500, 200));
}

#[test]
fn bad_file_does_not_stop_the_batch() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("a-corrupt.png"), b"\x89PNG\r\n\x1a\ngarbage").unwrap();
    write_jpeg(&root.join("b-fine.jpg"), 640, 480);

    let report = process::process(root, &ProcessOptions::default(), None).unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(report.resized(), 1);
    assert!(matches!(report.files[0].outcome, FileOutcome::Failed { .. }));
    assert!(!root.join("data/a-corrupt.png").exists());
    assert_eq!(output_jpeg_dims(&root.join("data/b-fine.jpg")), (500, 375));
}

#[test]
fn lookalike_marker_does_not_change_output_shape() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let lookalike = [0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x05, 0x00, 0x09];
    let zero_width = [0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00];
    write_jpeg(&root.join("a.jpg"), 64, 48);
    insert_comment(&root.join("a.jpg"), &lookalike);
    write_jpeg(&root.join("b.jpg"), 64, 48);
    insert_comment(&root.join("b.jpg"), &zero_width);

    let report = process::process(root, &ProcessOptions::default(), None).unwrap();

    assert_eq!(report.resized(), 2, "{:?}", report.files);
    for file in &report.files {
        assert!(matches!(
            file.outcome,
            FileOutcome::Resized { original, resized, .. }
                if (original.width, original.height) == (64, 48)
                    && (resized.width, resized.height) == (500, 375)
        ));
    }
    assert_eq!(
        image::image_dimensions(root.join("data/a.jpg")).unwrap(),
        (500, 375)
    );
    assert_eq!(
        image::image_dimensions(root.join("data/b.jpg")).unwrap(),
        (500, 375)
    );
}

#[test]
fn second_run_ignores_previous_output() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_jpeg(&root.join("a.jpg"), 800, 600);

    process::process(root, &ProcessOptions::default(), None).unwrap();
    let report = process::process(root, &ProcessOptions::default(), None).unwrap();

    assert_eq!(report.files.len(), 1);
    assert!(!root.join("data/data").exists());
}

#[test]
fn zero_width_keeps_native_size() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_png(&root.join("icon.png"), 48, 32);

    let options = ProcessOptions {
        resize: ResizeConfig {
            width: 0,
            quality: Quality::new(90),
        },
        ..ProcessOptions::default()
    };
    process::process(root, &options, None).unwrap();

    assert_eq!(output_jpeg_dims(&root.join("data/icon.png")), (48, 32));
}

#[test]
fn config_file_drives_options() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("config.toml"),
        "[resize]\nwidth = 100\n\n[output]\ndir_name = \"small\"\n",
    )
    .unwrap();
    write_jpeg(&root.join("a.jpg"), 400, 200);

    let settings = config::load_config(root).unwrap();
    let options = ProcessOptions {
        resize: settings.resize_config(),
        output_dir_name: settings.output.dir_name.clone(),
    };
    let report = process::process(root, &options, None).unwrap();

    // config.toml itself is listed and skipped
    assert_eq!(report.skipped(), 1);
    assert_eq!(output_jpeg_dims(&root.join("small/a.jpg")), (100, 50));
}

#[test]
fn identify_uses_header_readers_only() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_png(&root.join("a.png"), 400, 200);
    write_jpeg(&root.join("b.jpg"), 120, 90);

    let files = process::identify(root, "data").unwrap();
    let listed: Vec<Option<(u32, u32)>> = files
        .iter()
        .map(|f| f.dimensions.map(|d| (d.width, d.height)))
        .collect();
    assert_eq!(listed, vec![Some((400, 200)), Some((120, 90))]);

    // Nothing written
    assert!(!root.join("data").exists());

    let png = png_dimensions(&fs::read(root.join("a.png")).unwrap());
    assert_eq!((png.width, png.height), (400, 200));
}
