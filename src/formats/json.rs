//! ParaView style JSON colormaps.
//!
//! The file is an array whose first object carries a flat `RGBPoints`
//! array of `x r g b` groups, an optional `Name` and an optional `Type`
//! (`Segmented` or `Listed`, listed when absent).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use super::{file_stem, normalize_positions, read_text, write_text};
use crate::colormaps::table::sample_positions;
use crate::colormaps::{Breakpoint, ColorTable, Rgba, SegmentData, TableData};
use crate::error::{CmapError, Result};

#[derive(Debug, Serialize, Deserialize)]
struct JsonColormap {
    #[serde(rename = "Name", alias = "name", default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "Type", alias = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(rename = "RGBPoints", default)]
    rgb_points: Option<Vec<f64>>,
}

/// Read a `.json` colormap.
pub fn read_json(path: &Path) -> Result<ColorTable> {
    let text = read_text(path)?;
    let table = parse_json(&text, path)?;
    info!(
        path = %path.display(),
        colormap = table.name(),
        kind = if table.is_listed() { "listed" } else { "segmented" },
        "Loaded .json colormap"
    );
    Ok(table)
}

/// Parse JSON colormap text; `path` supplies error context and the default name.
pub fn parse_json(text: &str, path: &Path) -> Result<ColorTable> {
    let entries: Vec<JsonColormap> = serde_json::from_str(text)
        .map_err(|e| CmapError::malformed(path, Some(e.line()), e.to_string()))?;
    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| CmapError::malformed(path, None, "empty colormap array"))?;

    let points = entry
        .rgb_points
        .ok_or_else(|| CmapError::malformed(path, None, "missing RGBPoints"))?;
    if points.is_empty() || points.len() % 4 != 0 {
        return Err(CmapError::malformed(
            path,
            None,
            format!(
                "RGBPoints must hold x r g b groups, got {} values",
                points.len()
            ),
        ));
    }
    if points.iter().any(|v| !v.is_finite()) {
        return Err(CmapError::malformed(path, None, "RGBPoints must be finite"));
    }

    let groups: Vec<&[f64]> = points.chunks_exact(4).collect();
    let scale = if groups.iter().any(|g| g[1..].iter().any(|v| *v > 1.0)) {
        debug!(path = %path.display(), "RGBPoints on the 0..255 scale");
        255.0
    } else {
        1.0
    };
    let name = entry.name.unwrap_or_else(|| file_stem(path));
    let segmented = match entry.kind.as_deref().map(str::to_lowercase).as_deref() {
        None | Some("listed") => false,
        Some("segmented") => true,
        Some(other) => {
            return Err(CmapError::malformed(
                path,
                None,
                format!("unknown colormap Type '{other}'"),
            ))
        }
    };

    let built = if segmented {
        let xs: Vec<f64> = groups.iter().map(|g| g[0]).collect();
        let positions = normalize_positions(path, &xs)?;
        let channel = |k: usize| -> Vec<Breakpoint> {
            positions
                .iter()
                .zip(&groups)
                .map(|(x, g)| Breakpoint::continuous(*x, g[k] / scale))
                .collect()
        };
        ColorTable::segmented(name, SegmentData::new(channel(1), channel(2), channel(3)))
    } else {
        let colors = groups
            .iter()
            .map(|g| Rgba::rgb(g[1] / scale, g[2] / scale, g[3] / scale))
            .collect();
        ColorTable::listed(name, colors)
    };
    built.map_err(|e| CmapError::malformed(path, None, e.to_string()))
}

/// Render `table` as a single-entry JSON colormap array.
pub fn to_json_string(table: &ColorTable) -> Result<String> {
    let (kind, samples): (&str, Vec<(f64, Rgba)>) = match table.data() {
        TableData::Listed(colors) => (
            "Listed",
            sample_positions(colors.len()).zip(colors.iter().copied()).collect(),
        ),
        TableData::Segmented(segments) => ("Segmented", segment_points(segments)),
    };
    let rgb_points = samples
        .iter()
        .flat_map(|(x, c)| [*x, c.r, c.g, c.b])
        .collect();
    let entry = JsonColormap {
        name: Some(table.name().to_string()),
        kind: Some(kind.to_string()),
        rgb_points: Some(rgb_points),
    };
    Ok(serde_json::to_string_pretty(&[entry])?)
}

/// One point per breakpoint position; a discontinuity becomes two points
/// at the same position, incoming color first.
fn segment_points(segments: &SegmentData) -> Vec<(f64, Rgba)> {
    let mut points = Vec::new();
    for x in segments.positions() {
        let (below, above) = segments.limits_at(x);
        if x <= 0.0 {
            points.push((x, above));
        } else if x >= 1.0 {
            points.push((x, below));
        } else {
            points.push((x, below));
            if above != below {
                points.push((x, above));
            }
        }
    }
    points
}

/// Write `table` as a `.json` colormap.
pub fn write_json(path: &Path, table: &ColorTable) -> Result<()> {
    write_text(path, &to_json_string(table)?)?;
    info!(path = %path.display(), colormap = table.name(), "Saved .json colormap");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<ColorTable> {
        parse_json(text, Path::new("dir/fallback.json"))
    }

    #[test]
    fn test_listed_without_type() {
        let table = parse(r#"[{"Name":"X","RGBPoints":[0,255,0,0, 1,0,0,255]}]"#).unwrap();
        assert_eq!(table.name(), "X");
        assert!(table.is_listed());
        assert_eq!(
            table.data(),
            &TableData::Listed(vec![Rgba::rgb(1.0, 0.0, 0.0), Rgba::rgb(0.0, 0.0, 1.0)])
        );
    }

    #[test]
    fn test_segmented_unit_scale() {
        let table = parse(
            r#"[{"name":"ramp","type":"Segmented","ColorSpace":"RGB",
                 "RGBPoints":[-1,0,0,0, 0,0.5,0.5,0.5, 1,1,1,1]}]"#,
        )
        .unwrap();
        assert!(table.is_segmented());
        assert_eq!(table.len(), 3);
        assert_eq!(table.sample(0.5), Rgba::rgb(0.5, 0.5, 0.5));
        assert_eq!(table.sample(0.75).r, 0.75);
    }

    #[test]
    fn test_name_defaults_to_stem() {
        let table = parse(r#"[{"RGBPoints":[0,0,0,0, 1,1,1,1]}]"#).unwrap();
        assert_eq!(table.name(), "fallback");
    }

    #[test]
    fn test_malformed_documents() {
        for text in [
            r#"[{"Name":"X"}]"#,
            r#"[]"#,
            r#"{"RGBPoints":[0,0,0,0]}"#,
            r#"[{"RGBPoints":[0,0,0]}]"#,
            r#"[{"Type":"Spline","RGBPoints":[0,0,0,0, 1,1,1,1]}]"#,
            r#"[{"Type":"Segmented","RGBPoints":[0,0,0,0, 0,1,1,1]}]"#,
            "not json",
        ] {
            assert!(
                matches!(parse(text), Err(CmapError::MalformedFile { .. })),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_writer_round_trip() {
        let listed =
            ColorTable::listed("pair", vec![Rgba::rgb(0.2, 0.4, 0.6), Rgba::rgb(1.0, 1.0, 1.0)])
                .unwrap();
        let text = to_json_string(&listed).unwrap();
        assert_eq!(parse(&text).unwrap(), listed);

        let segmented = listed.to_gradient().unwrap();
        let text = to_json_string(&segmented).unwrap();
        let back = parse(&text).unwrap();
        assert!(back.is_segmented());
        assert_eq!(back.sample(0.5), segmented.sample(0.5));
    }

    #[test]
    fn test_writer_keeps_discontinuity() {
        let red = vec![
            Breakpoint::continuous(0.0, 0.0),
            Breakpoint::new(0.5, 0.0, 1.0),
            Breakpoint::continuous(1.0, 1.0),
        ];
        let flat = vec![
            Breakpoint::continuous(0.0, 0.3),
            Breakpoint::continuous(1.0, 0.3),
        ];
        let jump =
            ColorTable::segmented("jump", SegmentData::new(red, flat.clone(), flat)).unwrap();

        let text = to_json_string(&jump).unwrap();
        let back = parse(&text).unwrap();
        for t in [0.0, 0.25, 0.5, 0.6, 0.75, 1.0] {
            assert_eq!(back.sample(t), jump.sample(t), "t = {t}");
        }
        assert_eq!(back.sample(0.6).r, 1.0);
    }
}
