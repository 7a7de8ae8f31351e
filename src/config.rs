//! Configuration management for cmapio.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CmapError, Result};
use crate::formats::DEFAULT_CPT_SAMPLES;
use crate::preview;

/// Command-line arguments for cmapio
#[derive(Parser, Debug, Default)]
#[command(name = "cmapio")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Colormap to load: a built-in name or a .cpt, .ct or .json file
    #[arg(required_unless_present = "list")]
    pub input: Option<String>,

    /// Output file; the format follows the extension (.cpt, .ct, .json, .png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rename the colormap
    #[arg(short, long)]
    pub name: Option<String>,

    /// Convert a listed colormap to a gradient
    #[arg(long)]
    pub gradient: bool,

    /// Reverse the colormap
    #[arg(short, long)]
    pub reverse: bool,

    /// Convert the colormap to greyscale
    #[arg(short, long)]
    pub greyscale: bool,

    /// Luminance weighting for --greyscale (1 = Rec.709, 2 = Rec.601, 3 = perceptual)
    #[arg(short, long)]
    pub weights: Option<u8>,

    /// Directories searched for colormap files
    #[arg(short = 'd', long = "search-dir", env = "CMAPIO_SEARCH_DIRS", value_delimiter = ':')]
    pub search_dirs: Vec<PathBuf>,

    /// Number of colors sampled when writing .cpt files
    #[arg(short, long)]
    pub samples: Option<usize>,

    /// List the built-in colormaps and exit
    #[arg(short, long)]
    pub list: bool,

    /// Path to JSON configuration file
    #[arg(short, long, env = "CMAPIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CMAPIO_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Colormap loading and export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directories searched for colormap files given by relative path
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,

    /// Number of colors sampled when writing .cpt files
    #[serde(default = "default_cpt_samples")]
    pub cpt_samples: usize,

    /// Default greyscale luminance weighting selector
    #[serde(default = "default_greyscale_weights")]
    pub greyscale_weights: u8,
}

/// Preview image configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_width")]
    pub width: u32,

    #[serde(default = "default_preview_height")]
    pub height: u32,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Preview configuration
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Args)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args))
    }

    /// Build configuration from already parsed arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if !args.search_dirs.is_empty() {
            config.data.search_dirs = args.search_dirs.clone();
        }
        if let Some(samples) = args.samples {
            config.data.cpt_samples = samples;
        }
        if let Some(weights) = args.weights {
            config.data.greyscale_weights = weights;
        }
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CmapError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if !other.data.search_dirs.is_empty() {
            self.data.search_dirs = other.data.search_dirs;
        }
        self.data.cpt_samples = other.data.cpt_samples;
        self.data.greyscale_weights = other.data.greyscale_weights;
        self.preview = other.preview;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(CmapError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if self.data.cpt_samples < 2 {
            return Err(CmapError::Config {
                message: format!(
                    "cpt_samples must be at least 2, got {}",
                    self.data.cpt_samples
                ),
            });
        }

        if !(1..=3).contains(&self.data.greyscale_weights) {
            return Err(CmapError::Config {
                message: format!(
                    "Invalid greyscale weights: {}. Must be 1, 2 or 3",
                    self.data.greyscale_weights
                ),
            });
        }

        if self.preview.width == 0 || self.preview.height == 0 {
            return Err(CmapError::Config {
                message: "Preview dimensions must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            preview: PreviewConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            search_dirs: Vec::new(),
            cpt_samples: default_cpt_samples(),
            greyscale_weights: default_greyscale_weights(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: default_preview_width(),
            height: default_preview_height(),
        }
    }
}

// Default value functions for serde
fn default_cpt_samples() -> usize {
    DEFAULT_CPT_SAMPLES
}

fn default_greyscale_weights() -> u8 {
    1
}

fn default_preview_width() -> u32 {
    preview::DEFAULT_WIDTH
}

fn default_preview_height() -> u32 {
    preview::DEFAULT_HEIGHT
}

fn default_log_level() -> String {
    "info".to_string()
}
