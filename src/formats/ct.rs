//! Plain color tables (`.ct`): one `r g b` row per color, 0..255.

use std::path::Path;
use tracing::info;

use super::{file_stem, parse_number, read_text, write_text};
use crate::colormaps::{ColorTable, Rgba, TableData, DEFAULT_RESOLUTION};
use crate::error::{CmapError, Result};

/// Read a `.ct` file into a listed table named after the file stem.
///
/// An optional fourth column is read as alpha.
pub fn read_ct(path: &Path) -> Result<ColorTable> {
    let text = read_text(path)?;
    let table = parse_ct(&text, path, file_stem(path))?;
    info!(
        path = %path.display(),
        colormap = table.name(),
        colors = table.len(),
        "Loaded .ct colormap"
    );
    Ok(table)
}

pub fn parse_ct(text: &str, path: &Path, name: String) -> Result<ColorTable> {
    let mut colors = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(CmapError::malformed(
                path,
                Some(line_no),
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }
        let r = parse_number(path, line_no, fields[0])?;
        let g = parse_number(path, line_no, fields[1])?;
        let b = parse_number(path, line_no, fields[2])?;
        let a = match fields.get(3) {
            Some(token) => parse_number(path, line_no, token)?,
            None => 255.0,
        };
        let color = Rgba::new(r / 255.0, g / 255.0, b / 255.0, a / 255.0);
        if !color.to_array().iter().all(|c| (0.0..=1.0).contains(c)) {
            return Err(CmapError::malformed(
                path,
                Some(line_no),
                "color components must lie in 0..255",
            ));
        }
        colors.push(color);
    }

    if colors.is_empty() {
        return Err(CmapError::malformed(path, None, "no color rows"));
    }
    ColorTable::listed(name, colors).map_err(|e| CmapError::malformed(path, None, e.to_string()))
}

/// Render `table` as `r g b` rows; segmented tables are sampled 256 times.
pub fn to_ct_string(table: &ColorTable) -> String {
    let colors = match table.data() {
        TableData::Listed(colors) => colors.clone(),
        TableData::Segmented(_) => table.sample_n(DEFAULT_RESOLUTION),
    };
    colors
        .iter()
        .map(|c| {
            let [r, g, b, _] = c.to_rgba8();
            format!("{r} {g} {b}\n")
        })
        .collect()
}

/// Write `table` as a `.ct` file.
pub fn write_ct(path: &Path, table: &ColorTable) -> Result<()> {
    write_text(path, &to_ct_string(table))?;
    info!(path = %path.display(), colormap = table.name(), "Saved .ct colormap");
    Ok(())
}
