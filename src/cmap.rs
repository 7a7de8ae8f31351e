//! The `ColorMap` facade.
//!
//! A [`ColorMap`] wraps one [`ColorTable`] and is built from a
//! [`ColorMapInput`]: a registry name, a list of colors, a segment mapping
//! or a file path. Transforms return new colormaps; the wrapped table is
//! never mutated.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

use crate::colormaps::{
    get_colormap, is_builtin, to_colorgrad, Breakpoint, Channel, ColorLookup, ColorTable,
    GreyscaleWeights, Rgba, SegmentData, TableData,
};
use crate::error::{CmapError, Result};
use crate::formats::{self, CptExtensions, FileFormat, DEFAULT_CPT_SAMPLES};
use crate::gdal::{to_indexed_color_table, IndexedColorTable};
use crate::logging::{log_operation_end, log_operation_start, log_table_stats};
use crate::preview;

/// Name given to colormaps built from in-memory data without a label
pub const DEFAULT_NAME: &str = "default";

/// The accepted ways of describing a colormap.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorMapInput {
    /// A built-in colormap name
    Name(String),
    /// RGB or RGBA tuples with components in [0, 1]
    List(Vec<Vec<f64>>),
    /// Per-channel breakpoints
    Dict(SegmentData),
    /// A `.cpt`, `.ct` or `.json` file
    FilePath(PathBuf),
}

impl ColorMapInput {
    /// Classify a string argument.
    ///
    /// Built-in names win over files. Strings with a colormap file
    /// extension are looked up as given, then inside each of
    /// `search_dirs` in order; a file found nowhere is still returned as
    /// `FilePath` so that loading reports it as missing.
    pub fn parse(arg: &str, search_dirs: &[PathBuf]) -> Result<Self> {
        if is_builtin(arg) {
            return Ok(ColorMapInput::Name(arg.to_string()));
        }

        let path = Path::new(arg);
        if FileFormat::from_path(path).is_some() {
            if path.is_file() || path.is_absolute() {
                return Ok(ColorMapInput::FilePath(path.to_path_buf()));
            }
            let found = search_dirs
                .iter()
                .map(|dir| dir.join(path))
                .find(|candidate| candidate.is_file());
            debug!(arg = arg, found = ?found, "Resolved colormap file");
            return Ok(ColorMapInput::FilePath(
                found.unwrap_or_else(|| path.to_path_buf()),
            ));
        }

        Err(CmapError::UnrecognizedInput {
            input: arg.to_string(),
        })
    }
}

impl FromStr for ColorMapInput {
    type Err = CmapError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ColorMapInput::parse(s, &[])
    }
}

impl From<Vec<Vec<f64>>> for ColorMapInput {
    fn from(colors: Vec<Vec<f64>>) -> Self {
        ColorMapInput::List(colors)
    }
}

impl From<SegmentData> for ColorMapInput {
    fn from(data: SegmentData) -> Self {
        ColorMapInput::Dict(data)
    }
}

impl From<PathBuf> for ColorMapInput {
    fn from(path: PathBuf) -> Self {
        ColorMapInput::FilePath(path)
    }
}

/// One indexed element of a colormap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// The i-th color of a listed colormap
    Color(Rgba),
    /// The i-th breakpoint of every channel of a segmented colormap
    Row(SegmentRow),
}

/// Breakpoints sharing an index across channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRow {
    pub red: Breakpoint,
    pub green: Option<Breakpoint>,
    pub blue: Option<Breakpoint>,
    pub alpha: Option<Breakpoint>,
}

/// List view of a colormap.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ColorList {
    Colors(Vec<Rgba>),
    Channels(Vec<(Channel, Vec<Breakpoint>)>),
}

/// Mapping view of a colormap.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ColorDict {
    /// Listed colors split by component
    Components {
        #[serde(rename = "R")]
        r: Vec<f64>,
        #[serde(rename = "G")]
        g: Vec<f64>,
        #[serde(rename = "B")]
        b: Vec<f64>,
        #[serde(rename = "A")]
        a: Vec<f64>,
    },
    /// Segment data keyed by channel
    Segments(SegmentData),
}

/// A colormap with construction, transform and export operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    table: ColorTable,
}

impl ColorMap {
    /// Build a colormap from any supported input.
    ///
    /// `name` overrides the default name: the registry name, the file stem,
    /// or `"default"` for in-memory data.
    pub fn new(input: ColorMapInput, name: Option<&str>) -> Result<Self> {
        let start = Instant::now();
        log_operation_start("colormap_load", None);

        let source = match &input {
            ColorMapInput::Name(_) => "registry",
            ColorMapInput::List(_) => "list",
            ColorMapInput::Dict(_) => "dict",
            ColorMapInput::FilePath(_) => "file",
        };
        let result = Self::build(input, name);
        if let Ok(cmap) = &result {
            log_table_stats(source, &cmap.table);
        }
        log_operation_end("colormap_load", start, result.is_ok());
        result
    }

    fn build(input: ColorMapInput, name: Option<&str>) -> Result<Self> {
        let table = match input {
            ColorMapInput::Name(registry_name) => get_colormap(&registry_name)?,
            ColorMapInput::List(colors) => {
                ColorTable::from_components(name.unwrap_or(DEFAULT_NAME), colors.as_slice())?
            }
            ColorMapInput::Dict(data) => {
                ColorTable::segmented(name.unwrap_or(DEFAULT_NAME), data)?
            }
            ColorMapInput::FilePath(path) => formats::read_file(&path)?,
        };
        let table = match name {
            Some(name) => table.with_name(name),
            None => table,
        };
        Ok(Self { table })
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::new(ColorMapInput::Name(name.to_string()), None)
    }

    pub fn from_list<C: AsRef<[f64]>>(name: &str, colors: &[C]) -> Result<Self> {
        let colors = colors.iter().map(|c| c.as_ref().to_vec()).collect();
        Self::new(ColorMapInput::List(colors), Some(name))
    }

    pub fn from_dict(name: &str, data: SegmentData) -> Result<Self> {
        Self::new(ColorMapInput::Dict(data), Some(name))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(ColorMapInput::FilePath(path.as_ref().to_path_buf()), None)
    }

    pub fn from_table(table: ColorTable) -> Self {
        Self { table }
    }

    pub fn name(&self) -> &str {
        self.table.name()
    }

    pub fn table(&self) -> &ColorTable {
        &self.table
    }

    pub fn into_table(self) -> ColorTable {
        self.table
    }

    /// Number of colors (listed) or breakpoints (segmented)
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The i-th color or breakpoint row
    pub fn get(&self, index: usize) -> Option<Entry> {
        match self.table.data() {
            TableData::Listed(colors) => colors.get(index).copied().map(Entry::Color),
            TableData::Segmented(segments) => {
                let red = *segments.red.get(index)?;
                Some(Entry::Row(SegmentRow {
                    red,
                    green: segments.green.get(index).copied(),
                    blue: segments.blue.get(index).copied(),
                    alpha: segments
                        .alpha
                        .as_ref()
                        .and_then(|a| a.get(index).copied()),
                }))
            }
        }
    }

    pub fn sample(&self, t: f64) -> Rgba {
        self.table.sample(t)
    }

    pub fn to_list(&self) -> ColorList {
        match self.table.data() {
            TableData::Listed(colors) => ColorList::Colors(colors.clone()),
            TableData::Segmented(segments) => ColorList::Channels(
                segments
                    .channels()
                    .map(|(channel, points)| (channel, points.to_vec()))
                    .collect(),
            ),
        }
    }

    pub fn to_dict(&self) -> ColorDict {
        match self.table.data() {
            TableData::Listed(colors) => ColorDict::Components {
                r: colors.iter().map(|c| c.r).collect(),
                g: colors.iter().map(|c| c.g).collect(),
                b: colors.iter().map(|c| c.b).collect(),
                a: colors.iter().map(|c| c.a).collect(),
            },
            TableData::Segmented(segments) => ColorDict::Segments(segments.clone()),
        }
    }

    pub fn to_gradient(&self) -> Result<ColorMap> {
        self.table.to_gradient().map(Self::from_table)
    }

    pub fn reverse(&self) -> Result<ColorMap> {
        self.table.reverse().map(Self::from_table)
    }

    pub fn convert_to_greyscale(&self, weights: GreyscaleWeights) -> Result<ColorMap> {
        self.table.convert_to_greyscale(weights).map(Self::from_table)
    }

    /// Save as `.cpt` with 255 samples; `.cpt` is appended when `path` has
    /// no extension. Returns the path written.
    pub fn save_as_cpt(&self, path: impl AsRef<Path>, extensions: &CptExtensions) -> Result<PathBuf> {
        self.save_as_cpt_with_samples(path, extensions, DEFAULT_CPT_SAMPLES)
    }

    pub fn save_as_cpt_with_samples(
        &self,
        path: impl AsRef<Path>,
        extensions: &CptExtensions,
        samples: usize,
    ) -> Result<PathBuf> {
        let mut path = path.as_ref().to_path_buf();
        if path.extension().is_none() {
            path.set_extension("cpt");
        }
        formats::write_cpt(&path, &self.table, extensions, samples)?;
        Ok(path)
    }

    pub fn save_as_ct(&self, path: impl AsRef<Path>) -> Result<()> {
        formats::write_ct(path.as_ref(), &self.table)
    }

    pub fn save_as_json(&self, path: impl AsRef<Path>) -> Result<()> {
        formats::write_json(path.as_ref(), &self.table)
    }

    /// Write a horizontal colour bar image
    pub fn save_preview(&self, path: impl AsRef<Path>, width: u32, height: u32) -> Result<()> {
        preview::save_colorbar(&self.table, path.as_ref(), width, height)
    }

    /// Indexed 0..255 palette for GIS raster hosts
    pub fn to_external_color_table(&self) -> IndexedColorTable {
        to_indexed_color_table(&self.table)
    }

    /// Hand the colormap to `colorgrad`
    pub fn to_colorgrad(&self) -> Result<colorgrad::Gradient> {
        to_colorgrad(&self.table)
    }
}

impl From<ColorTable> for ColorMap {
    fn from(table: ColorTable) -> Self {
        Self::from_table(table)
    }
}

impl ColorLookup for ColorMap {
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        self.table.map_normalized(value)
    }

    fn name(&self) -> &str {
        self.table.name()
    }
}

fn fmt_color(c: &Rgba) -> String {
    format!("({:.4}, {:.4}, {:.4}, {:.4})", c.r, c.g, c.b, c.a)
}

impl fmt::Display for ColorMap {
    /// Listed colormaps show their first and last colors, segmented ones
    /// their breakpoints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table.data() {
            TableData::Listed(colors) => {
                write!(f, "{} (listed, {} colors)", self.name(), colors.len())?;
                if let (Some(first), Some(last)) = (colors.first(), colors.last()) {
                    write!(f, ": {} .. {}", fmt_color(first), fmt_color(last))?;
                }
                Ok(())
            }
            TableData::Segmented(segments) => {
                writeln!(f, "{} (segmented)", self.name())?;
                for (channel, points) in segments.channels() {
                    let rows: Vec<String> = points
                        .iter()
                        .map(|p| format!("({:.4}, {:.4}, {:.4})", p.x, p.y_in, p.y_out))
                        .collect();
                    writeln!(f, "  {channel}: {}", rows.join(" "))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dict() -> SegmentData {
        let red = vec![
            Breakpoint::continuous(0.0, 1.0),
            Breakpoint::continuous(0.05, 1.0),
            Breakpoint::continuous(0.11, 0.0),
            Breakpoint::continuous(0.66, 1.0),
            Breakpoint::continuous(0.89, 1.0),
            Breakpoint::continuous(1.0, 0.5),
        ];
        let green = vec![
            Breakpoint::continuous(0.0, 1.0),
            Breakpoint::continuous(0.05, 1.0),
            Breakpoint::continuous(0.11, 0.0),
            Breakpoint::continuous(0.375, 1.0),
            Breakpoint::continuous(0.64, 1.0),
            Breakpoint::continuous(0.91, 0.0),
            Breakpoint::continuous(1.0, 0.0),
        ];
        let blue = vec![
            Breakpoint::continuous(0.0, 1.0),
            Breakpoint::continuous(0.05, 1.0),
            Breakpoint::continuous(0.11, 1.0),
            Breakpoint::continuous(0.34, 1.0),
            Breakpoint::continuous(0.65, 0.0),
            Breakpoint::continuous(1.0, 0.0),
        ];
        SegmentData::new(red, green, blue.clone()).with_alpha(blue)
    }

    #[test]
    fn test_parse_input_kinds() {
        assert_eq!(
            "viridis".parse::<ColorMapInput>().unwrap(),
            ColorMapInput::Name("viridis".to_string())
        );
        assert_eq!(
            "maps/ETOPO1.cpt".parse::<ColorMapInput>().unwrap(),
            ColorMapInput::FilePath(PathBuf::from("maps/ETOPO1.cpt"))
        );
        assert!(matches!(
            "not_a_colormap".parse::<ColorMapInput>(),
            Err(CmapError::UnrecognizedInput { .. })
        ));
        assert!(matches!(
            "palette.txt".parse::<ColorMapInput>(),
            Err(CmapError::UnrecognizedInput { .. })
        ));
    }

    #[test]
    fn test_search_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("grey.ct"), "0 0 0\n255 255 255\n").unwrap();
        let input = ColorMapInput::parse("grey.ct", &[dir.path().to_path_buf()]).unwrap();
        assert_eq!(input, ColorMapInput::FilePath(dir.path().join("grey.ct")));
        let cmap = ColorMap::new(input, None).unwrap();
        assert_eq!(cmap.name(), "grey");
    }

    #[test]
    fn test_from_name() {
        let cmap = ColorMap::from_name("Viridis").unwrap();
        assert_eq!(cmap.name(), "viridis");
        assert_eq!(cmap.len(), 256);

        let renamed = ColorMap::new(ColorMapInput::Name("magma".into()), Some("mine")).unwrap();
        assert_eq!(renamed.name(), "mine");
    }

    #[test]
    fn test_from_list() {
        let cmap = ColorMap::from_list("trio", &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
            .unwrap();
        assert_eq!(cmap.len(), 3);
        assert_eq!(cmap.get(1), Some(Entry::Color(Rgba::rgb(0.0, 1.0, 0.0))));
        assert_eq!(cmap.get(3), None);

        let bad = ColorMap::new(ColorMapInput::List(vec![vec![0.0, 1.0]]), None);
        assert!(matches!(bad, Err(CmapError::InvalidArgument { .. })));
    }

    #[test]
    fn test_from_dict() {
        let cmap = ColorMap::from_dict("dict", sample_dict()).unwrap();
        // length follows the red channel
        assert_eq!(cmap.len(), 6);
        assert!(cmap.get(6).is_none());

        let Some(Entry::Row(row)) = cmap.get(5) else {
            panic!("expected a breakpoint row");
        };
        assert_eq!(row.red, Breakpoint::continuous(1.0, 0.5));
        assert_eq!(row.green, Some(Breakpoint::continuous(0.91, 0.0)));
        assert_eq!(row.alpha, Some(Breakpoint::continuous(1.0, 0.0)));

        let mut broken = sample_dict();
        broken.red.pop();
        assert!(matches!(
            ColorMap::from_dict("broken", broken),
            Err(CmapError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_views() {
        let cmap =
            ColorMap::from_list("pair", &[vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0, 0.5]]).unwrap();
        assert_eq!(
            cmap.to_list(),
            ColorList::Colors(vec![Rgba::rgb(1.0, 0.0, 0.0), Rgba::new(0.0, 0.0, 1.0, 0.5)])
        );
        assert_eq!(
            cmap.to_dict(),
            ColorDict::Components {
                r: vec![1.0, 0.0],
                g: vec![0.0, 0.0],
                b: vec![0.0, 1.0],
                a: vec![1.0, 0.5],
            }
        );

        let segmented = ColorMap::from_dict("dict", sample_dict()).unwrap();
        let ColorList::Channels(channels) = segmented.to_list() else {
            panic!("expected channel list");
        };
        let names: Vec<Channel> = channels.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            names,
            vec![Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha]
        );
        assert_eq!(segmented.to_dict(), ColorDict::Segments(sample_dict()));
    }

    #[test]
    fn test_transforms_return_new_maps() {
        let cmap = ColorMap::from_list("pair", &[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        let reversed = cmap.reverse().unwrap();
        assert_eq!(cmap.sample(0.0), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(reversed.sample(0.0), Rgba::rgb(0.0, 0.0, 1.0));

        let grey = cmap.convert_to_greyscale(GreyscaleWeights::Rec601).unwrap();
        assert_eq!(grey.name(), "pair_grey");
        assert!(cmap.table().is_listed());

        let gradient = cmap.to_gradient().unwrap();
        assert!(gradient.table().is_segmented());
    }

    #[test]
    fn test_display() {
        let cmap = ColorMap::from_list("pair", &[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        let text = cmap.to_string();
        assert!(text.starts_with("pair (listed, 2 colors)"));
        assert!(text.contains("(1.0000, 0.0000, 0.0000, 1.0000)"));

        let segmented = ColorMap::from_dict("dict", sample_dict()).unwrap();
        let text = segmented.to_string();
        assert!(text.contains("red:"));
        assert!(text.contains("alpha:"));
    }

    #[test]
    fn test_cpt_extension_appended() {
        let dir = tempfile::tempdir().unwrap();
        let cmap = ColorMap::from_name("greys").unwrap();
        let written = cmap
            .save_as_cpt(dir.path().join("out"), &CptExtensions::default())
            .unwrap();
        assert_eq!(written, dir.path().join("out.cpt"));
        assert!(written.is_file());
    }
}
