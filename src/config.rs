//! Run configuration.
//!
//! Handles loading and validating an optional `config.toml` placed in the
//! source directory. User values override stock defaults; CLI flags override
//! both (see `main.rs`).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [resize]
//! width = 500        # Output width in pixels (0 = keep native width)
//! quality = 75       # JPEG quality (1-100)
//!
//! [output]
//! dir_name = "data"  # Subdirectory created next to each source image
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::imaging::{Quality, ResizeConfig};
use crate::naming::DEFAULT_OUTPUT_DIR_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the source directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Resize settings (width, quality).
    pub resize: ResizeSettings,
    /// Output location settings.
    pub output: OutputSettings,
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.resize.quality) {
            return Err(ConfigError::Validation(
                "resize.quality must be 1-100".into(),
            ));
        }
        let name = self.output.dir_name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "output.dir_name must be a plain directory name, got {name:?}"
            )));
        }
        Ok(())
    }

    /// Resize parameters for the imaging layer.
    pub fn resize_config(&self) -> ResizeConfig {
        ResizeConfig {
            width: self.resize.width,
            quality: Quality::new(self.resize.quality),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeSettings {
    /// Output width in pixels; the height follows the aspect ratio.
    /// 0 keeps each image's native width.
    pub width: u32,
    /// JPEG encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            width: 500,
            quality: 75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Name of the subdirectory created next to each source image.
    pub dir_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir_name: DEFAULT_OUTPUT_DIR_NAME.to_string(),
        }
    }
}

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields the defaults. Keys the file leaves out keep their
/// default values; unknown keys are rejected. The result is validated.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# imgshrink configuration
# ========================
# Place this file in the source directory as config.toml.
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.

[resize]
# Output width in pixels. The height follows the source aspect ratio.
# 0 keeps each image's native width (re-encode only).
width = 500
# JPEG encoding quality, 1 (smallest) to 100 (best).
quality = 75

[output]
# Resized copies are written to <image dir>/<dir_name>/<file name>.
# Directories with this name are skipped when scanning.
dir_name = "data"
"##
}
