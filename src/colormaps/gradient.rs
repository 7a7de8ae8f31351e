//! Conversion between [`ColorTable`] and `colorgrad::Gradient`.
//!
//! `colorgrad` is the host gradient library: built-in presets come from it,
//! and callers who render with it get a gradient back from
//! [`to_colorgrad`]. Nothing else in the crate stores its types.

use colorgrad::{Color, CustomGradient, Gradient};

use super::table::{ColorTable, Rgba, DEFAULT_RESOLUTION};
use crate::error::{CmapError, Result};

/// Build a `colorgrad` gradient that reproduces `table`.
///
/// The table is sampled at 256 evenly spaced points, so discontinuities
/// in segmented tables are softened to one sample step.
pub fn to_colorgrad(table: &ColorTable) -> Result<Gradient> {
    let colors: Vec<Color> = table
        .sample_n(DEFAULT_RESOLUTION)
        .into_iter()
        .map(|c| Color::new(c.r, c.g, c.b, c.a))
        .collect();

    CustomGradient::new()
        .colors(&colors)
        .build()
        .map_err(|e| CmapError::UnsupportedConversion {
            message: format!("cannot build gradient for '{}': {}", table.name(), e),
        })
}

/// Discretize a `colorgrad` gradient into a listed table of `n` colors.
pub fn from_colorgrad(name: &str, gradient: &Gradient, n: usize) -> Result<ColorTable> {
    if n == 0 {
        return Err(CmapError::invalid_argument(
            "n",
            "at least one sample is required",
        ));
    }
    let (start, end) = gradient.domain();
    let colors = (0..n)
        .map(|i| {
            let t = if n > 1 {
                start + (end - start) * i as f64 / (n - 1) as f64
            } else {
                start
            };
            let c = gradient.at(t);
            Rgba::new(
                c.r.clamp(0.0, 1.0),
                c.g.clamp(0.0, 1.0),
                c.b.clamp(0.0, 1.0),
                c.a.clamp(0.0, 1.0),
            )
        })
        .collect();
    ColorTable::listed(name, colors)
}
