//! Color lookup trait and the named colormap registry.
//!
//! This module defines the common interface for everything that maps a
//! normalized value to a color, and resolves built-in colormaps by name.

use super::table::{ColorTable, Rgba};
use crate::error::{CmapError, Result};

/// Trait for color mapping implementations
pub trait ColorLookup: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f64) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f64, min: f64, max: f64) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

impl ColorLookup for ColorTable {
    fn map_normalized(&self, value: f64) -> [u8; 4] {
        self.sample(value).to_rgba8()
    }

    fn name(&self) -> &str {
        ColorTable::name(self)
    }
}

/// Get a built-in colormap by name (case-insensitive)
pub fn get_colormap(name: &str) -> Result<ColorTable> {
    use super::{diverging, sequential};

    let key = name.to_lowercase();
    sequential::lookup(&key)
        .or_else(|| diverging::lookup(&key))
        .unwrap_or_else(|| {
            Err(CmapError::UnrecognizedInput {
                input: name.to_string(),
            })
        })
}

/// Whether `name` resolves to a built-in colormap
pub fn is_builtin(name: &str) -> bool {
    let key = name.to_lowercase();
    super::sequential::NAMES.contains(&key.as_str())
        || super::diverging::NAMES.contains(&key.as_str())
}

/// All built-in colormap names
pub fn colormap_names() -> Vec<&'static str> {
    super::sequential::NAMES
        .iter()
        .chain(super::diverging::NAMES.iter())
        .copied()
        .collect()
}

/// Opaque color from 8-bit channels
pub(crate) fn rgb8(c: [u8; 3]) -> Rgba {
    Rgba::from_rgba8([c[0], c[1], c[2], 255])
}
