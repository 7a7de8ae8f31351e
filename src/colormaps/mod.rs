//! Colormap model, transforms and the built-in registry.
//!
//! [`ColorTable`] is the single in-memory representation; named colormaps,
//! files and user input are all converted into it.

pub mod colormap;
pub mod diverging;
pub mod gradient;
pub mod sequential;
pub mod table;

pub use colormap::{colormap_names, get_colormap, is_builtin, ColorLookup};
pub use gradient::{from_colorgrad, to_colorgrad};
pub use table::{
    sample_positions, Breakpoint, Channel, ColorTable, GreyscaleWeights, Rgba, SegmentData,
    TableData, DEFAULT_RESOLUTION,
};
