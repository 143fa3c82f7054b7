use crate::{header::HeaderLayout, raster::RasterOptions};

pub mod error;
pub mod header;
pub mod pixel;
pub mod raster;


/// Renders a vector image into a complete pixel header in memory.
pub fn svg_to_header(svg_in: &[u8], options: &RasterOptions) -> error::Result<Vec<u8>> {
    log::info!(
        "Rasterising vector image to {}x{}",
        options.width,
        options.height
    );
    let image = raster::rasterize(svg_in, options)?;
    let pixels = pixel::pack_buffer(&image.data, image.channels)?;

    let mut header = Vec::new();
    HeaderLayout::default().render(&mut header, image.width, image.height, &pixels)?;
    Ok(header)
}
