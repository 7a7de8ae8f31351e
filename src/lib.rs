//! # cmapio
//!
//! Load, convert and export colormaps.
//!
//! This library reads colormaps from GMT `.cpt` palettes, plain `.ct` color
//! tables, ParaView style `.json` files, built-in names and in-memory color
//! lists, and writes them back out in the same formats or as a PNG preview.
//!
//! ## Key Features
//!
//! - **One model**: every source becomes a listed or segmented [`ColorTable`]
//! - **Transforms**: reverse, greyscale and listed-to-gradient conversion
//! - **Built-ins**: perceptual, sequential and diverging colormaps via `colorgrad`
//! - **Interop**: 256-entry indexed palettes for GIS raster hosts
//!
//! ## Architecture
//!
//! - **colormaps**: table model, lookup trait and built-in registry
//! - **formats**: file readers and writers
//! - **cmap**: the [`ColorMap`] facade tying inputs, transforms and exports together

pub mod cmap;
pub mod colormaps;
pub mod config;
pub mod error;
pub mod formats;
pub mod gdal;
pub mod logging;
pub mod preview;

pub use cmap::{ColorDict, ColorList, ColorMap, ColorMapInput, Entry, SegmentRow};
pub use colormaps::{
    Breakpoint, Channel, ColorLookup, ColorTable, GreyscaleWeights, Rgba, SegmentData, TableData,
};
pub use config::Config;
pub use error::{CmapError, Result};
pub use formats::{CptExtensions, FileFormat};
pub use gdal::IndexedColorTable;
pub use logging::{
    generate_operation_id, init_tracing, log_error, log_operation_end, log_operation_start,
    log_table_stats, log_timed_operation,
};
