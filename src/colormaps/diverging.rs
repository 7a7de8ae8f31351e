//! Diverging colormaps (two-hue progression with center).
//!
//! These colormaps are suitable for data that diverges from a central value.
//! `coolwarm` and `seismic` are defined here as evenly spaced anchor colors
//! and exposed as segmented tables; the rest are `colorgrad` presets.

use super::colormap::rgb8;
use super::gradient::from_colorgrad;
use super::table::{ColorTable, Rgba, SegmentData, DEFAULT_RESOLUTION};
use crate::error::Result;

/// Names of the diverging colormaps, in registry order
pub const NAMES: &[&str] = &[
    "coolwarm", "seismic", "rdbu", "spectral", "brbg", "piyg", "prgn", "puor", "rdgy", "rdylbu",
    "rdylgn",
];

/// Blue to white to red - good for temperature data
const COOLWARM: [[u8; 3]; 32] = [
    [59, 76, 192],
    [68, 90, 204],
    [77, 104, 215],
    [87, 117, 225],
    [98, 130, 234],
    [108, 142, 241],
    [119, 154, 247],
    [130, 165, 251],
    [141, 176, 254],
    [152, 185, 255],
    [163, 194, 255],
    [174, 201, 253],
    [184, 208, 249],
    [194, 213, 244],
    [204, 217, 238],
    [213, 219, 230],
    [221, 221, 221],
    [229, 216, 209],
    [236, 211, 197],
    [241, 204, 185],
    [245, 196, 173],
    [247, 187, 160],
    [247, 177, 148],
    [247, 166, 135],
    [244, 154, 123],
    [241, 141, 111],
    [236, 127, 99],
    [229, 112, 88],
    [222, 96, 77],
    [213, 80, 66],
    [203, 62, 56],
    [192, 40, 47],
];

/// Dark blue to white to dark red, for anomalies
const SEISMIC: [[u8; 3]; 15] = [
    [0, 0, 127],
    [0, 0, 191],
    [0, 63, 255],
    [0, 127, 255],
    [0, 191, 255],
    [127, 223, 255],
    [191, 239, 255],
    [255, 255, 255],
    [255, 239, 191],
    [255, 223, 127],
    [255, 191, 0],
    [255, 127, 0],
    [255, 63, 0],
    [191, 0, 0],
    [127, 0, 0],
];

fn anchored(name: &str, anchors: &[[u8; 3]]) -> Result<ColorTable> {
    let colors: Vec<Rgba> = anchors.iter().copied().map(rgb8).collect();
    ColorTable::segmented(name, SegmentData::from_colors(&colors, false))
}

fn preset(name: &str) -> Option<colorgrad::Gradient> {
    let gradient = match name {
        "rdbu" => colorgrad::rd_bu(),
        "spectral" => colorgrad::spectral(),
        "brbg" => colorgrad::br_bg(),
        "piyg" => colorgrad::pi_yg(),
        "prgn" => colorgrad::pr_gn(),
        "puor" => colorgrad::pu_or(),
        "rdgy" => colorgrad::rd_gy(),
        "rdylbu" => colorgrad::rd_yl_bu(),
        "rdylgn" => colorgrad::rd_yl_gn(),
        _ => return None,
    };
    Some(gradient)
}

/// Resolve a lowercase diverging colormap name
pub fn lookup(name: &str) -> Option<Result<ColorTable>> {
    match name {
        "coolwarm" => Some(anchored(name, &COOLWARM)),
        "seismic" => Some(anchored(name, &SEISMIC)),
        _ => preset(name).map(|gradient| from_colorgrad(name, &gradient, DEFAULT_RESOLUTION)),
    }
}
