//! Colormap file formats.
//!
//! Readers turn a file into a [`ColorTable`]; writers emit a table in the
//! same text formats. Files are always read and written whole.

pub mod cpt;
pub mod ct;
pub mod json;

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::colormaps::ColorTable;
use crate::error::{CmapError, Result};

pub use cpt::{read_cpt, read_cpt_with_extensions, write_cpt, CptExtensions, DEFAULT_CPT_SAMPLES};
pub use ct::{read_ct, write_ct};
pub use json::{read_json, write_json};

/// A file format the readers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// GMT color palette table
    Cpt,
    /// Plain `r g b` color table
    Ct,
    /// ParaView style JSON colormap
    Json,
}

impl FileFormat {
    pub const EXTENSIONS: [&'static str; 3] = ["cpt", "ct", "json"];

    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "cpt" => Some(FileFormat::Cpt),
            "ct" => Some(FileFormat::Ct),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }

    pub fn read(&self, path: &Path) -> Result<ColorTable> {
        match self {
            FileFormat::Cpt => read_cpt(path),
            FileFormat::Ct => read_ct(path),
            FileFormat::Json => read_json(path),
        }
    }
}

/// Read a colormap file, choosing the parser from its extension.
pub fn read_file(path: &Path) -> Result<ColorTable> {
    let format = FileFormat::from_path(path).ok_or_else(|| CmapError::UnrecognizedInput {
        input: path.display().to_string(),
    })?;
    format.read(path)
}

/// Read the whole file, mapping a missing or unreadable path to `FileNotFound`.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(CmapError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "Read colormap file");
    Ok(text)
}

fn read_error(path: &Path, err: io::Error) -> CmapError {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => CmapError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CmapError::Io(err),
    }
}

/// Write `contents`, creating missing parent directories first.
pub(crate) fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote colormap file");
    Ok(())
}

/// Default table name for a file: its stem.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "default".to_string())
}

/// Parse one numeric field of a data row.
pub(crate) fn parse_number(path: &Path, line: usize, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CmapError::malformed(path, Some(line), format!("non-numeric field '{token}'")))
}

/// Map `(x - x[0]) / (x[-1] - x[0])` over the positions.
pub(crate) fn normalize_positions(path: &Path, xs: &[f64]) -> Result<Vec<f64>> {
    let (first, last) = match (xs.first(), xs.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(CmapError::malformed(path, None, "no color rows")),
    };
    let span = last - first;
    if span == 0.0 {
        return Err(CmapError::malformed(
            path,
            None,
            format!("degenerate value range [{first}, {last}]"),
        ));
    }
    Ok(xs.iter().map(|x| (x - first) / span).collect())
}

/// C `printf("%e")` style formatting: six decimals, signed two digit exponent.
pub(crate) fn format_sci(value: f64) -> String {
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}
