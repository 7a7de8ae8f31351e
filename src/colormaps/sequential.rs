//! Sequential and cyclic colormaps.
//!
//! These colormaps are suitable for data that progresses from low to high.
//! They come from the `colorgrad` presets and are discretized into 256-entry
//! listed tables, matching how plotting libraries ship them.

use super::gradient::from_colorgrad;
use super::table::{ColorTable, DEFAULT_RESOLUTION};
use crate::error::Result;

/// Names of the sequential colormaps, in registry order
pub const NAMES: &[&str] = &[
    "viridis",
    "plasma",
    "inferno",
    "magma",
    "cividis",
    "turbo",
    "cubehelix",
    "warm",
    "cool",
    "blues",
    "greens",
    "greys",
    "oranges",
    "purples",
    "reds",
    "ylorrd",
    "ylgnbu",
    "rainbow",
    "sinebow",
];

fn preset(name: &str) -> Option<colorgrad::Gradient> {
    let gradient = match name {
        "viridis" => colorgrad::viridis(),
        "plasma" => colorgrad::plasma(),
        "inferno" => colorgrad::inferno(),
        "magma" => colorgrad::magma(),
        "cividis" => colorgrad::cividis(),
        "turbo" => colorgrad::turbo(),
        "cubehelix" => colorgrad::cubehelix_default(),
        "warm" => colorgrad::warm(),
        "cool" => colorgrad::cool(),
        "blues" => colorgrad::blues(),
        "greens" => colorgrad::greens(),
        "greys" => colorgrad::greys(),
        "oranges" => colorgrad::oranges(),
        "purples" => colorgrad::purples(),
        "reds" => colorgrad::reds(),
        "ylorrd" => colorgrad::yl_or_rd(),
        "ylgnbu" => colorgrad::yl_gn_bu(),
        "rainbow" => colorgrad::rainbow(),
        "sinebow" => colorgrad::sinebow(),
        _ => return None,
    };
    Some(gradient)
}

/// Resolve a lowercase sequential colormap name
pub fn lookup(name: &str) -> Option<Result<ColorTable>> {
    preset(name).map(|gradient| from_colorgrad(name, &gradient, DEFAULT_RESOLUTION))
}
