//! # imgshrink
//!
//! Batch-resize JPEG and PNG images. Every image under a source directory is
//! scaled to a fixed width (aspect ratio preserved) and written as a JPEG into
//! a `data` folder next to it:
//!
//! ```text
//! photos/beach.jpg      →  photos/data/beach.jpg
//! photos/trip/map.png   →  photos/trip/data/map.png
//! ```
//!
//! # Header Readers
//!
//! Native dimensions come from two byte-level readers in
//! [`imaging::header`] rather than from a decoder:
//!
//! - **JPEG**: scans for the first `0xFF 0xC0/0xC1/0xC2` Start-Of-Frame marker
//!   and reads height then width from the frame header.
//! - **PNG**: checks the 8-byte signature and reads width and height from the
//!   IHDR chunk at its fixed offset.
//!
//! Both return the `(0, 0)` sentinel on any mismatch. When a reader's result
//! has a zero side the backend falls back to the `image` crate's own header
//! decoding. Output sizes always come from the decoded pixels.
//!
//! The JPEG scan matches raw byte pairs and does not walk the segment
//! structure, so a marker-like pair inside another segment wins if it comes
//! first.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Header readers, dimension math, `ImageBackend` + `RustBackend` |
//! | [`scan`] | Walks the source directory, tags files by format |
//! | [`process`] | Batch driver: per-file outcomes, progress events, report |
//! | [`naming`] | `<dir>/data/<file>` output path convention |
//! | [`config`] | Optional `config.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Failure Isolation
//!
//! One bad file never stops a batch. Each file's result is recorded in the
//! [`process::ProcessReport`], failures are logged, and the run continues.
//! Unreadable directory entries are reported the same way.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
