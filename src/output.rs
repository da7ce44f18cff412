//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Resize
//!
//! ```text
//! 001 photos/beach.jpg
//!     2000x1500 → 500x375
//!     Saved: /home/me/photos/data/beach.jpg
//! 002 photos/notes.txt
//!     skipped: unsupported file type (expected jpg, jpeg, png)
//! 003 photos/broken.png
//!     failed: Image processing failed: ...
//!
//! Resized 1 image, skipped 1, failed 1
//! ```
//!
//! ## Identify
//!
//! ```text
//! 001 photos/beach.jpg  jpeg  2000x1500
//! 002 photos/icon.png   png   unknown
//! ```
//!
//! # Architecture
//!
//! Each listing has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions do no I/O.

use crate::imaging::Dimensions;
use crate::process::{FileOutcome, IdentifiedFile, ProcessEvent, ProcessReport};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn format_dimensions(dims: Dimensions) -> String {
    format!("{}x{}", dims.width, dims.height)
}

/// Display `path` relative to `root` when it lives under it.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

// ============================================================================
// Resize output
// ============================================================================

/// Format a single resize progress event as display lines.
pub fn format_process_event(event: &ProcessEvent, root: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        format_index(event.index),
        display_path(&event.result.source, root)
    )];

    match &event.result.outcome {
        FileOutcome::Resized {
            output,
            original,
            resized,
        } => {
            lines.push(format!(
                "{}{} \u{2192} {}",
                indent(1),
                format_dimensions(*original),
                format_dimensions(*resized)
            ));
            lines.push(format!("{}Saved: {}", indent(1), output.display()));
        }
        FileOutcome::Skipped { reason } => {
            lines.push(format!("{}skipped: {}", indent(1), reason));
        }
        FileOutcome::Failed { error } => {
            lines.push(format!("{}failed: {}", indent(1), error));
        }
    }
    lines
}

/// One-line batch summary.
pub fn format_report_summary(report: &ProcessReport) -> String {
    format!(
        "Resized {}, skipped {}, failed {}",
        plural(report.resized(), "image", "images"),
        report.skipped(),
        report.failed()
    )
}

/// Print a progress event to stdout.
pub fn print_process_event(event: &ProcessEvent, root: &Path) {
    for line in format_process_event(event, root) {
        println!("{}", line);
    }
}

// ============================================================================
// Identify output
// ============================================================================

/// Format the identify listing with aligned columns.
pub fn format_identify_output(files: &[IdentifiedFile], root: &Path) -> Vec<String> {
    let paths: Vec<String> = files.iter().map(|f| display_path(&f.path, root)).collect();
    let width = paths.iter().map(|p| p.chars().count()).max().unwrap_or(0);

    files
        .iter()
        .zip(&paths)
        .enumerate()
        .map(|(i, (file, path))| {
            let detail = match (&file.error, file.dimensions) {
                (Some(err), _) => format!("error: {}", err),
                (None, Some(dims)) => format_dimensions(dims),
                (None, None) => "unknown".to_string(),
            };
            format!(
                "{} {:<width$}  {:<4}  {}",
                format_index(i + 1),
                path,
                file.format.name(),
                detail
            )
        })
        .collect()
}

/// Print the identify listing to stdout.
pub fn print_identify_output(files: &[IdentifiedFile], root: &Path) {
    for line in format_identify_output(files, root) {
        println!("{}", line);
    }
}
