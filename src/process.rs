//! Batch resizing.
//!
//! Takes the file list from [`scan`](crate::scan) and resizes every image,
//! one file at a time:
//!
//! 1. native dimensions from the header readers (decoder fallback)
//! 2. decode → Lanczos3 resize to the [`ResizeConfig`] width, height from the
//!    decoded aspect ratio → JPEG encode
//! 3. write to `<dir>/<output_dir_name>/<file name>`, creating the folder
//!
//! ## Failure handling
//!
//! Each file succeeds or fails on its own. A file that cannot be read,
//! identified, decoded or written is recorded as [`FileOutcome::Failed`] and
//! the batch moves on to the next file. Files with an unsupported extension
//! are recorded as [`FileOutcome::Skipped`]. Entries the directory walk could
//! not read are recorded as failures after the scanned files. Only a missing
//! source root aborts the run.
//!
//! ## Progress
//!
//! An optional `Sender<ProcessEvent>` receives one event per file as soon as
//! it is done, so the CLI can print while the batch is still running.

use crate::imaging::{
    BackendError, Dimensions, ImageBackend, ImageFormat, ResizeConfig, RustBackend, header,
    resize_image, supported_input_extensions,
};
use crate::naming;
use crate::scan::{self, ScanError, ScannedFile};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("Could not determine dimensions of {0}")]
    UnknownDimensions(PathBuf),
    #[error("Path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// Settings for a batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOptions {
    pub resize: ResizeConfig,
    pub output_dir_name: String,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            resize: ResizeConfig::default(),
            output_dir_name: naming::DEFAULT_OUTPUT_DIR_NAME.to_string(),
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    Resized {
        output: PathBuf,
        original: Dimensions,
        resized: Dimensions,
    },
    Skipped {
        reason: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileResult {
    pub source: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Progress event sent after each file.
#[derive(Debug, Clone)]
pub struct ProcessEvent {
    /// 1-based position in the batch.
    pub index: usize,
    pub total: usize,
    pub result: FileResult,
}

/// Summary of a batch run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessReport {
    pub files: Vec<FileResult>,
}

impl ProcessReport {
    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }

    pub fn resized(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Resized { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Scan `source_root` and resize every image found with the default backend.
pub fn process(
    source_root: &Path,
    options: &ProcessOptions,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessReport, ScanError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, source_root, options, events)
}

/// Process images using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    source_root: &Path,
    options: &ProcessOptions,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessReport, ScanError> {
    let scan = scan::scan(source_root, &options.output_dir_name)?;
    info!(
        root = %source_root.display(),
        files = scan.files.len(),
        unreadable = scan.unreadable.len(),
        "scanned source directory"
    );

    let total = scan.files.len() + scan.unreadable.len();
    let mut report = ProcessReport::default();
    let mut record = |result: FileResult| {
        if let Some(tx) = &events {
            // A dropped receiver only means nobody is listening.
            let _ = tx.send(ProcessEvent {
                index: report.files.len() + 1,
                total,
                result: result.clone(),
            });
        }
        report.files.push(result);
    };

    for file in &scan.files {
        let outcome = match file.format {
            None => FileOutcome::Skipped {
                reason: format!(
                    "unsupported file type (expected {})",
                    supported_input_extensions().join(", ")
                ),
            },
            Some(_) => match process_file(backend, file, options) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(path = %file.path.display(), error = %e, "failed to resize");
                    FileOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            },
        };

        record(FileResult {
            source: file.path.clone(),
            outcome,
        });
    }

    for entry in scan.unreadable {
        record(FileResult {
            source: entry.path,
            outcome: FileOutcome::Failed { error: entry.error },
        });
    }

    Ok(report)
}

/// Resize a single scanned image.
pub fn process_file(
    backend: &impl ImageBackend,
    file: &ScannedFile,
    options: &ProcessOptions,
) -> Result<FileOutcome, ProcessError> {
    if file.format.is_none() {
        return Err(ProcessError::UnsupportedFormat(file.path.clone()));
    }

    let identified = backend.identify(&file.path)?;
    if identified.has_zero_side() {
        return Err(ProcessError::UnknownDimensions(file.path.clone()));
    }

    let output = naming::output_path(&file.path, &options.output_dir_name)
        .ok_or_else(|| ProcessError::NoFileName(file.path.clone()))?;
    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let written = resize_image(backend, &file.path, &output, &options.resize)?;
    if written.original != identified {
        debug!(
            path = %file.path.display(),
            header = ?identified,
            decoded = ?written.original,
            "header size differs from decoded size"
        );
    }

    let shown = std::path::absolute(&output).unwrap_or_else(|_| output.clone());
    info!(path = %shown.display(), "saved resized image");

    Ok(FileOutcome::Resized {
        output,
        original: written.original,
        resized: written.resized,
    })
}

// ============================================================================
// Identify (header readers only)
// ============================================================================

/// Header-reader result for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentifiedFile {
    pub path: PathBuf,
    pub format: ImageFormat,
    /// `None` when the header reader found no usable size.
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the header readers over every image under `source_root`.
///
/// No decoding and no writes: this shows exactly what the byte-level
/// readers see, including files they cannot parse. Unreadable directory
/// entries are logged by the scan and left out.
pub fn identify(
    source_root: &Path,
    output_dir_name: &str,
) -> Result<Vec<IdentifiedFile>, ScanError> {
    let scan = scan::scan(source_root, output_dir_name)?;
    Ok(scan
        .files
        .into_iter()
        .filter_map(|file| {
            let format = file.format?;
            Some(identify_file(file.path, format))
        })
        .collect())
}

fn identify_file(path: PathBuf, format: ImageFormat) -> IdentifiedFile {
    match std::fs::read(&path) {
        Ok(bytes) => {
            let dims = header::read_dimensions(format, &bytes);
            IdentifiedFile {
                path,
                format,
                dimensions: (!dims.has_zero_side()).then_some(dims),
                error: None,
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read file");
            IdentifiedFile {
                path,
                format,
                dimensions: None,
                error: Some(e.to_string()),
            }
        }
    }
}
