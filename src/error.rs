//! Error types for cmapio.
//!
//! Every fallible operation in the crate returns [`Result`], whose error
//! side is the [`CmapError`] enum defined here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Forms accepted when constructing a colormap, listed in error messages.
pub const SUPPORTED_INPUTS: &str =
    "a built-in colormap name, a list of RGB(A) tuples, a red/green/blue(/alpha) segment mapping, \
     or a path to a .cpt, .ct or .json file";

/// The main error type for cmapio operations.
#[derive(Error, Debug)]
pub enum CmapError {
    /// The given path does not exist or cannot be opened
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// A colormap file could not be parsed
    #[error("Malformed file {}{}: {message}", .path.display(), line_suffix(.line))]
    MalformedFile {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },

    /// Constructor input matches none of the supported forms
    #[error("Unrecognized colormap input '{input}': expected {}", SUPPORTED_INPUTS)]
    UnrecognizedInput { input: String },

    /// Invalid parameter errors
    #[error("Invalid argument: {param} - {message}")]
    InvalidArgument { param: String, message: String },

    /// A transform or export is not possible for this table
    #[error("Unsupported conversion: {message}")]
    UnsupportedConversion { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Preview rendering errors
    #[error("Image generation error: {message}")]
    ImageGeneration { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CmapError {
    pub(crate) fn malformed(path: &Path, line: Option<usize>, message: impl Into<String>) -> Self {
        CmapError::MalformedFile {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(param: &str, message: impl Into<String>) -> Self {
        CmapError::InvalidArgument {
            param: param.to_string(),
            message: message.into(),
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Convenience type alias for Results with CmapError
pub type Result<T> = std::result::Result<T, CmapError>;
