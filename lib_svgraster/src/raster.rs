use log::debug;
use resvg::{
    tiny_skia,
    usvg::{self, Transform},
};

use crate::error::{Error, Result};


/// Target geometry for rasterisation.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    /// Width of the raster in pixels.
    pub width: u32,

    /// Height of the raster in pixels.
    pub height: u32,

    /// Pixel density in DPI, applied where the vector image uses physical units.
    pub density: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: 191,
            height: 142,
            density: 96.0,
        }
    }
}

/// A rasterised image as a flat row-major sample buffer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,

    /// Bytes per pixel in `data`: 3 for RGB, 4 for RGBA.
    pub channels: usize,

    pub data: Vec<u8>,
}

/// Rasterises a vector image to exactly the requested dimensions.
///
/// The image is scaled independently along both axes, so the aspect ratio
/// distorts whenever it does not match the requested dimensions.
pub fn rasterize(svg_in: &[u8], options: &RasterOptions) -> Result<RasterImage> {
    let mut usvg_options = usvg::Options::default();
    usvg_options.dpi = options.density;
    usvg_options.fontdb_mut().load_system_fonts();
    let svg = usvg::Tree::from_data(svg_in, &usvg_options)?;

    let source_size = svg.size();
    debug!(
        "Source image size: {}x{}",
        source_size.width(),
        source_size.height()
    );

    let mut raster_image =
        tiny_skia::Pixmap::new(options.width, options.height).ok_or(Error::InvalidRasterSize {
            width: options.width,
            height: options.height,
        })?;
    resvg::render(
        &svg,
        Transform::from_scale(
            options.width as f32 / source_size.width(),
            options.height as f32 / source_size.height(),
        ),
        &mut raster_image.as_mut(),
    );

    // tiny-skia stores premultiplied RGBA, while the packed artifact stores
    // straight alpha.
    let mut data = raster_image.take();
    for sample in data.chunks_exact_mut(4) {
        let alpha = sample[3] as f32 / 255.0;
        if alpha > 0.0 {
            sample[0] = (sample[0] as f32 / alpha).min(255.0) as u8;
            sample[1] = (sample[1] as f32 / alpha).min(255.0) as u8;
            sample[2] = (sample[2] as f32 / alpha).min(255.0) as u8;
        }
    }

    Ok(RasterImage {
        width: options.width,
        height: options.height,
        channels: 4,
        data,
    })
}
