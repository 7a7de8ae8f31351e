//! Indexed color tables for GIS raster hosts.
//!
//! Raster libraries such as GDAL attach a palette of at most 256 RGBA8
//! entries to single-band rasters. [`IndexedColorTable`] mirrors that
//! structure so a host binding can copy it entry by entry.

use serde::{Deserialize, Serialize};

use crate::colormaps::{ColorTable, Rgba, TableData};
use crate::error::{CmapError, Result};

/// Maximum number of entries in an indexed color table
pub const MAX_ENTRIES: usize = 256;

/// A palette indexed 0..=255 with RGBA8 entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedColorTable {
    entries: Vec<[u8; 4]>,
}

impl IndexedColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set entry `index`; skipped entries in between become transparent black.
    pub fn set_color_entry(&mut self, index: usize, rgba: [u8; 4]) -> Result<()> {
        if index >= MAX_ENTRIES {
            return Err(CmapError::invalid_argument(
                "index",
                format!("color table index {index} exceeds {}", MAX_ENTRIES - 1),
            ));
        }
        if index >= self.entries.len() {
            self.entries.resize(index + 1, [0, 0, 0, 0]);
        }
        self.entries[index] = rgba;
        Ok(())
    }

    pub fn color_entry(&self, index: usize) -> Option<[u8; 4]> {
        self.entries.get(index).copied()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[[u8; 4]] {
        &self.entries
    }
}

/// Convert a table into an indexed palette.
///
/// Listed tables of up to 256 colors contribute one entry per color.
/// Longer listed tables and segmented tables are sampled at 256 evenly
/// spaced points so the palette spans the whole colormap.
pub fn to_indexed_color_table(table: &ColorTable) -> IndexedColorTable {
    let colors: Vec<Rgba> = match table.data() {
        TableData::Listed(colors) if colors.len() <= MAX_ENTRIES => colors.clone(),
        _ => table.sample_n(MAX_ENTRIES),
    };
    IndexedColorTable {
        entries: colors.iter().map(|c| c.to_rgba8()).collect(),
    }
}

/// Build a listed table from an indexed palette.
pub fn from_indexed_color_table(name: &str, palette: &IndexedColorTable) -> Result<ColorTable> {
    if palette.entries.is_empty() {
        return Err(CmapError::invalid_argument(
            "palette",
            "indexed color table has no entries",
        ));
    }
    let colors = palette.entries.iter().copied().map(Rgba::from_rgba8).collect();
    ColorTable::listed(name, colors)
}
