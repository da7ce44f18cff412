//! Minimal JPEG and PNG header readers.
//!
//! Recovers the native width and height of an image straight from its raw
//! bytes, without decoding pixels:
//! - JPEG: scans for the first Start-Of-Frame marker (`SOF0`, `SOF1`, `SOF2`)
//!   and reads the frame header that follows it.
//! - PNG: checks the 8-byte signature and reads the IHDR chunk, which the PNG
//!   format pins to a fixed position right after the signature.
//!
//! Both readers are pure functions over a borrowed buffer. Any structural
//! mismatch (wrong format, truncated input, corrupt header) yields
//! [`Dimensions::UNKNOWN`]; callers that need a real answer fall back to a
//! full decode.

use super::backend::Dimensions;
use super::params::ImageFormat;

/// Read dimensions from an in-memory image of the given format.
pub fn read_dimensions(format: ImageFormat, bytes: &[u8]) -> Dimensions {
    match format {
        ImageFormat::Jpeg => jpeg_dimensions(bytes),
        ImageFormat::Png => png_dimensions(bytes),
    }
}

// ---------------------------------------------------------------------------
// JPEG: first SOF marker
// ---------------------------------------------------------------------------

/// SOF0 (baseline), SOF1 (extended sequential), SOF2 (progressive).
const SOF_MARKERS: [u8; 3] = [0xC0, 0xC1, 0xC2];

/// Return the width and height of the first frame in a JPEG stream.
///
/// Frame header layout after the `0xFF 0xCn` marker:
///   Bytes 0-1: Segment length (big-endian u16, skipped)
///   Byte 2:    Sample precision (skipped)
///   Bytes 3-4: Height (big-endian u16)
///   Bytes 5-6: Width (big-endian u16)
///
/// The scan matches raw byte pairs, so a `0xFF 0xC0` sequence inside another
/// segment's payload or the entropy-coded data is taken for a real marker.
/// Only the first match is honored.
pub fn jpeg_dimensions(bytes: &[u8]) -> Dimensions {
    let Some(marker_pos) = bytes
        .windows(2)
        .position(|pair| pair[0] == 0xFF && SOF_MARKERS.contains(&pair[1]))
    else {
        return Dimensions::UNKNOWN;
    };

    // Skip 0xFF, the marker byte, the length field and the precision byte.
    let offset = marker_pos + 5;
    let Some(field) = bytes.get(offset..offset + 4) else {
        return Dimensions::UNKNOWN;
    };

    let height = u16::from_be_bytes([field[0], field[1]]);
    let width = u16::from_be_bytes([field[2], field[3]]);
    Dimensions {
        width: u32::from(width),
        height: u32::from(height),
    }
}

// ---------------------------------------------------------------------------
// PNG: signature + IHDR
// ---------------------------------------------------------------------------

pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";
const IHDR_CHUNK_TYPE: &[u8; 4] = b"IHDR";

/// Chunk type of the first chunk: after the signature and its 4-byte length.
const IHDR_TYPE_OFFSET: usize = 12;
const IHDR_WIDTH_OFFSET: usize = 16;
const IHDR_HEIGHT_OFFSET: usize = 20;

/// Return the width and height stored in a PNG's IHDR chunk.
///
/// The chunk length and CRC are not checked.
pub fn png_dimensions(bytes: &[u8]) -> Dimensions {
    if !bytes.starts_with(PNG_SIGNATURE) {
        return Dimensions::UNKNOWN;
    }
    if bytes.get(IHDR_TYPE_OFFSET..IHDR_TYPE_OFFSET + 4) != Some(IHDR_CHUNK_TYPE.as_slice()) {
        return Dimensions::UNKNOWN;
    }

    match (
        read_be_u32(bytes, IHDR_WIDTH_OFFSET),
        read_be_u32(bytes, IHDR_HEIGHT_OFFSET),
    ) {
        (Some(width), Some(height)) => Dimensions { width, height },
        _ => Dimensions::UNKNOWN,
    }
}

fn read_be_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let field = bytes.get(offset..offset + 4)?;
    Some(u32::from_be_bytes([field[0], field[1], field[2], field[3]]))
}
