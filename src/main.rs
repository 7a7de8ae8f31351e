//! cmapio - load, convert and export colormaps
//!
//! This is the main entry point for the cmapio command-line tool.

use std::path::Path;
use tracing::{error, info};

use cmapio::colormaps::colormap_names;
use cmapio::formats::read_cpt_with_extensions;
use cmapio::{
    init_tracing, log_error, log_table_stats, log_timed_operation, CmapError, ColorMap,
    ColorMapInput, Config, CptExtensions, GreyscaleWeights, Result,
};

fn main() -> Result<()> {
    let (config, args) = Config::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    init_tracing(&config.log_level);

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Starting cmapio v{}", env!("CARGO_PKG_VERSION"));

    if args.list {
        for name in colormap_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let input_arg = args.input.as_deref().ok_or_else(|| CmapError::InvalidArgument {
        param: "input".to_string(),
        message: "a colormap name or file is required".to_string(),
    })?;

    let input = ColorMapInput::parse(input_arg, &config.data.search_dirs).map_err(|e| {
        log_error(&e, "parsing input");
        e
    })?;

    let (mut cmap, extensions) = load(input, args.name.as_deref()).map_err(|e| {
        log_error(&e, "loading colormap");
        e
    })?;

    if args.gradient {
        cmap = cmap.to_gradient()?;
    }
    if args.reverse {
        cmap = cmap.reverse()?;
    }
    if args.greyscale {
        let weights = GreyscaleWeights::try_from(config.data.greyscale_weights)?;
        cmap = cmap.convert_to_greyscale(weights)?;
    }

    match &args.output {
        Some(output) => log_timed_operation("export", || {
            write_output(&cmap, output, &extensions, &config)
        })
        .map_err(|e| {
            log_error(&e, "writing output");
            e
        })?,
        None => println!("{}", cmap),
    }

    Ok(())
}

/// Load the colormap; a `.cpt` input also yields its B/F/N rows so a
/// `.cpt` output can carry them over.
fn load(input: ColorMapInput, name: Option<&str>) -> Result<(ColorMap, CptExtensions)> {
    match input {
        ColorMapInput::FilePath(path) if is_cpt(&path) => {
            let (table, extensions) = read_cpt_with_extensions(&path)?;
            let table = match name {
                Some(name) => table.with_name(name),
                None => table,
            };
            log_table_stats("file", &table);
            Ok((ColorMap::from_table(table), extensions))
        }
        other => Ok((ColorMap::new(other, name)?, CptExtensions::default())),
    }
}

fn is_cpt(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cpt"))
}

/// Write `cmap` in the format named by the output extension
fn write_output(
    cmap: &ColorMap,
    output: &Path,
    extensions: &CptExtensions,
    config: &Config,
) -> Result<()> {
    let ext = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "cpt" => {
            cmap.save_as_cpt_with_samples(output, extensions, config.data.cpt_samples)?;
        }
        "ct" => cmap.save_as_ct(output)?,
        "json" => cmap.save_as_json(output)?,
        "png" => cmap.save_preview(output, config.preview.width, config.preview.height)?,
        _ => {
            return Err(CmapError::UnrecognizedInput {
                input: output.display().to_string(),
            })
        }
    }

    info!("Wrote {}", output.display());
    Ok(())
}
