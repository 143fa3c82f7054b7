use std::{fs, fs::File, io::Write, path::PathBuf};

use anyhow::{Result, anyhow, ensure};
use clap::Parser;
use lib_svgraster::{
    header::HeaderLayout,
    pixel::pack_buffer,
    raster::{RasterOptions, rasterize},
};
use log::{LevelFilter, info};

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    pub log_level: LevelFilter,

    /// The vector image to rasterise.
    #[clap(default_value = "test_files/note.svg")]
    input: PathBuf,

    /// The header file to generate.
    #[clap(default_value = "svg_raster.h")]
    output: PathBuf,

    /// Width of the raster in pixels.
    #[clap(default_value = "191")]
    width: u32,

    /// Height of the raster in pixels.
    #[clap(default_value = "142")]
    height: u32,

    /// Pixel density in DPI, applied where the vector image uses physical units.
    #[clap(long, default_value = "96")]
    density: f32,
}

pub fn cli(cli: Cli) -> Result<()> {
    ensure!(
        cli.width > 0 && cli.height > 0,
        "Raster dimensions must be positive, but {}x{} were requested",
        cli.width,
        cli.height
    );

    info!("Reading vector image {:?}", cli.input);
    let svg = fs::read(&cli.input)
        .map_err(|error| anyhow!("Unable to read input file {:?}: {error}", cli.input))?;

    info!("Rasterising to {}x{}", cli.width, cli.height);
    let image = rasterize(&svg, &RasterOptions {
        width: cli.width,
        height: cli.height,
        density: cli.density,
    })?;

    let pixels = pack_buffer(&image.data, image.channels)?;

    // The header is rendered fully in memory, and the output file is only
    // touched once the whole artifact exists. A failed run hence leaves no
    // partial header behind.
    let mut header = Vec::new();
    HeaderLayout::default().render(&mut header, image.width, image.height, &pixels)?;

    info!("Writing header to {:?}", cli.output);
    File::create(&cli.output)
        .map_err(|error| anyhow!("Unable to create output file {:?}: {error}", cli.output))?
        .write_all(&header)
        .map_err(|error| anyhow!("Unable to write output file {:?}: {error}", cli.output))?;

    Ok(())
}
