//! Colour-bar previews.
//!
//! Renders a horizontal bar where column `x` shows the colormap at
//! `x / (width - 1)`, for a quick look at a table.

use image::{ImageBuffer, RgbaImage};
use std::path::Path;
use tracing::info;

use crate::colormaps::ColorLookup;
use crate::error::{CmapError, Result};

/// Default preview dimensions
pub const DEFAULT_WIDTH: u32 = 512;
pub const DEFAULT_HEIGHT: u32 = 48;

/// Render `colormap` into a `width` x `height` RGBA image.
pub fn render_colorbar(colormap: &dyn ColorLookup, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(CmapError::ImageGeneration {
            message: format!("invalid preview size {width}x{height}"),
        });
    }

    let mut img = ImageBuffer::new(width, height);
    for x in 0..width {
        let t = if width > 1 {
            f64::from(x) / f64::from(width - 1)
        } else {
            0.0
        };
        let color = image::Rgba(colormap.map_normalized(t));
        for y in 0..height {
            img.put_pixel(x, y, color);
        }
    }
    Ok(img)
}

/// Render and save a preview; the format follows the file extension.
pub fn save_colorbar(colormap: &dyn ColorLookup, path: &Path, width: u32, height: u32) -> Result<()> {
    let img = render_colorbar(colormap, width, height)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    img.save(path).map_err(|e| CmapError::ImageGeneration {
        message: format!("failed to write {}: {}", path.display(), e),
    })?;
    info!(
        path = %path.display(),
        colormap = colormap.name(),
        width,
        height,
        "Saved colormap preview"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::{ColorTable, Rgba};

    #[test]
    fn test_colorbar_orientation() {
        let table = ColorTable::listed(
            "two",
            vec![Rgba::rgb(1.0, 0.0, 0.0), Rgba::rgb(0.0, 0.0, 1.0)],
        )
        .unwrap();
        let img = render_colorbar(&table, 10, 4).unwrap();
        assert_eq!(img.dimensions(), (10, 4));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(9, 3).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_empty_size_rejected() {
        let table = ColorTable::listed("one", vec![Rgba::BLACK]).unwrap();
        assert!(render_colorbar(&table, 0, 10).is_err());
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("bar.png");
        let table = ColorTable::listed("one", vec![Rgba::BLACK]).unwrap();
        save_colorbar(&table, &path, 8, 2).unwrap();
        assert!(path.is_file());
    }
}
