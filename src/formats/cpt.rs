//! GMT color palette tables (`.cpt`).
//!
//! Data rows read `x0 r0 g0 b0 x1 r1 g1 b1`. A `# COLOR_MODEL = HSV`
//! comment switches the following rows to hue/saturation/value, and the
//! `B`, `F` and `N` rows give the background, foreground and NaN colors.

use colorgrad::Color;
use std::path::Path;
use tracing::{debug, info, warn};

use super::{file_stem, format_sci, normalize_positions, parse_number, read_text, write_text};
use crate::colormaps::{Breakpoint, ColorTable, Rgba, SegmentData};
use crate::colormaps::table::{sample_positions, unit_to_u8};
use crate::error::{CmapError, Result};

/// Number of colors sampled when writing a `.cpt` file.
pub const DEFAULT_CPT_SAMPLES: usize = 255;

/// Colors outside the table proper: the `B`, `F` and `N` rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CptExtensions {
    /// Color for values below the range
    pub background: Option<Rgba>,
    /// Color for values above the range
    pub foreground: Option<Rgba>,
    /// Color for missing values
    pub nan: Option<Rgba>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorModel {
    Rgb,
    Hsv,
}

impl ColorModel {
    fn to_rgb(self, triple: [f64; 3]) -> [f64; 3] {
        match self {
            ColorModel::Rgb => [triple[0] / 255.0, triple[1] / 255.0, triple[2] / 255.0],
            ColorModel::Hsv => {
                let [h, mut s, mut v] = triple;
                // saturation/value written on the 0..255 scale
                if s > 1.0 || v > 1.0 {
                    s /= 255.0;
                    v /= 255.0;
                }
                let c = Color::from_hsva(h, s, v, 1.0);
                [c.r, c.g, c.b]
            }
        }
    }
}

/// Read a `.cpt` file into a segmented table named after the file stem.
pub fn read_cpt(path: &Path) -> Result<ColorTable> {
    read_cpt_with_extensions(path).map(|(table, _)| table)
}

/// Read a `.cpt` file, also returning its `B`/`F`/`N` colors.
pub fn read_cpt_with_extensions(path: &Path) -> Result<(ColorTable, CptExtensions)> {
    let text = read_text(path)?;
    let (table, extensions) = parse_cpt(&text, path, file_stem(path))?;
    info!(
        path = %path.display(),
        colormap = table.name(),
        breakpoints = table.len(),
        "Loaded .cpt colormap"
    );
    Ok((table, extensions))
}

/// Parse `.cpt` text; `path` is only used for error context.
pub fn parse_cpt(text: &str, path: &Path, name: String) -> Result<(ColorTable, CptExtensions)> {
    let mut model = ColorModel::Rgb;
    let mut extensions = CptExtensions::default();
    let mut xs = Vec::new();
    let mut colors: Vec<[f64; 3]> = Vec::new();
    let mut closing: Option<(f64, [f64; 3])> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            let last = line.split_whitespace().last().unwrap_or_default();
            if last.trim_start_matches('+').eq_ignore_ascii_case("HSV") {
                debug!(line = line_no, "Switching to HSV color model");
                model = ColorModel::Hsv;
            }
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let slot = match fields[0] {
            "B" => Some(&mut extensions.background),
            "F" => Some(&mut extensions.foreground),
            "N" => Some(&mut extensions.nan),
            _ => None,
        };
        if let Some(slot) = slot {
            match parse_footer(&fields[1..], model) {
                Some(color) => *slot = Some(color),
                None => warn!(
                    path = %path.display(),
                    line = line_no,
                    "Skipping footer row without an RGB triple"
                ),
            }
            continue;
        }

        if fields.len() < 8 {
            return Err(CmapError::malformed(
                path,
                Some(line_no),
                format!("expected 8 fields, found {}", fields.len()),
            ));
        }
        let mut values = [0.0; 8];
        for (value, token) in values.iter_mut().zip(&fields[..8]) {
            *value = parse_number(path, line_no, token)?;
        }

        xs.push(values[0]);
        colors.push(model.to_rgb([values[1], values[2], values[3]]));
        closing = Some((values[4], model.to_rgb([values[5], values[6], values[7]])));
    }

    let (x_end, color_end) =
        closing.ok_or_else(|| CmapError::malformed(path, None, "no color rows"))?;
    xs.push(x_end);
    colors.push(color_end);

    let positions = normalize_positions(path, &xs)?;
    let channel = |k: usize| -> Vec<Breakpoint> {
        positions
            .iter()
            .zip(&colors)
            .map(|(x, c)| Breakpoint::continuous(*x, c[k]))
            .collect()
    };
    let segments = SegmentData::new(channel(0), channel(1), channel(2));
    let table = ColorTable::segmented(name, segments)
        .map_err(|e| CmapError::malformed(path, None, e.to_string()))?;
    Ok((table, extensions))
}

fn parse_footer(fields: &[&str], model: ColorModel) -> Option<Rgba> {
    if fields.len() < 3 {
        return None;
    }
    let mut triple = [0.0; 3];
    for (value, token) in triple.iter_mut().zip(fields) {
        *value = token.parse::<f64>().ok().filter(|v| v.is_finite())?;
    }
    let [r, g, b] = model.to_rgb(triple);
    Some(Rgba::rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)))
}

/// Render `table` as `.cpt` text with `samples` evenly spaced colors.
pub fn to_cpt_string(table: &ColorTable, extensions: &CptExtensions, samples: usize) -> Result<String> {
    if samples < 2 {
        return Err(CmapError::invalid_argument(
            "samples",
            format!("a .cpt file needs at least 2 samples, got {samples}"),
        ));
    }
    let positions: Vec<f64> = sample_positions(samples).collect();
    let colors: Vec<[u8; 4]> = positions
        .iter()
        .map(|t| table.sample(*t).to_rgba8())
        .collect();

    let mut out = String::from("# COLOR_MODEL = RGB\n");
    for i in 0..samples - 1 {
        let (c0, c1) = (colors[i], colors[i + 1]);
        out.push_str(&format!(
            "{} {:3} {:3} {:3} {} {:3} {:3} {:3}\n",
            format_sci(positions[i]),
            c0[0],
            c0[1],
            c0[2],
            format_sci(positions[i + 1]),
            c1[0],
            c1[1],
            c1[2],
        ));
    }

    let background = extensions.background.unwrap_or_else(|| table.sample(0.0));
    let foreground = extensions.foreground.unwrap_or_else(|| table.sample(1.0));
    let nan = extensions.nan.unwrap_or(Rgba::BLACK);
    for (tag, color) in [("B", background), ("F", foreground), ("N", nan)] {
        out.push_str(&format!(
            "{tag} {:3} {:3} {:3}\n",
            unit_to_u8(color.r),
            unit_to_u8(color.g),
            unit_to_u8(color.b)
        ));
    }
    Ok(out)
}

/// Write `table` as a `.cpt` file.
pub fn write_cpt(
    path: &Path,
    table: &ColorTable,
    extensions: &CptExtensions,
    samples: usize,
) -> Result<()> {
    let text = to_cpt_string(table, extensions, samples)?;
    write_text(path, &text)?;
    info!(path = %path.display(), colormap = table.name(), samples, "Saved .cpt colormap");
    Ok(())
}
