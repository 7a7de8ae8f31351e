//! Colormap file fixtures.
//!
//! Each helper writes a small file with known content into `dir` and
//! returns its path.

use std::fs;
use std::path::{Path, PathBuf};

fn write(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

/// A one-segment HSV palette running from pure red to pure green.
pub fn hsv_cpt(dir: &Path) -> PathBuf {
    write(
        dir,
        "hsv_ramp.cpt",
        "# COLOR_MODEL = HSV\n0.0 0 255 255 1.0 120 255 255\n",
    )
}

/// An RGB palette over a non-unit range with B/F/N rows.
pub fn rgb_cpt(dir: &Path) -> PathBuf {
    write(
        dir,
        "terrain.cpt",
        "# terrain test palette\n\
         # COLOR_MODEL = RGB\n\
         -100 0 0 255 0 0 255 0\n\
         0 0 255 0 100 255 255 255\n\
         B 0 0 0\n\
         F 255 255 255\n\
         N 128 128 128\n",
    )
}

/// A palette whose second row is truncated.
pub fn truncated_cpt(dir: &Path) -> PathBuf {
    write(dir, "broken.cpt", "0 0 0 0 1 255 255 255\n1 255 255\n")
}

/// A three color table, the last entry with alpha.
pub fn simple_ct(dir: &Path) -> PathBuf {
    write(
        dir,
        "simple.ct",
        "# r g b [a]\n255 0 0\n0 255 0\n0 0 255 128\n",
    )
}

/// A ParaView style file without a `Type` key.
pub fn listed_json(dir: &Path) -> PathBuf {
    write(
        dir,
        "x.json",
        r#"[{"Name":"X","RGBPoints":[0,255,0,0, 1,0,0,255]}]"#,
    )
}

/// A segmented JSON colormap with positions outside [0, 1].
pub fn segmented_json(dir: &Path) -> PathBuf {
    write(
        dir,
        "seg.json",
        r#"[{"Name":"seg","Type":"Segmented","RGBPoints":[-1,0,0,0, 0,0.5,0.5,0.5, 1,1,1,1]}]"#,
    )
}
