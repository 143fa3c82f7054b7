use std::io::Write;

use crate::error::{Error, Result};


/// Identifiers and formatting of a generated pixel header.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HeaderLayout {
    /// Name of the include guard macro.
    pub guard: String,

    /// Name of the macro holding the raster width.
    pub width_macro: String,

    /// Name of the macro holding the raster height.
    pub height_macro: String,

    /// Name of the pixel array.
    pub pixel_array: String,

    /// Number of pixel values per line of the array body.
    pub values_per_line: usize,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            guard: "SVG_RASTER_H".to_string(),
            width_macro: "SVG_RASTER_WIDTH".to_string(),
            height_macro: "SVG_RASTER_HEIGHT".to_string(),
            pixel_array: "svg_raster_pixels".to_string(),
            values_per_line: 12,
        }
    }
}

impl HeaderLayout {
    /// Writes a complete header declaring `width`, `height` and `pixels`.
    ///
    /// The declared array length always matches the number of emitted values,
    /// hence a pixel count that does not fill a `width`x`height` raster is
    /// rejected.
    pub fn render(
        &self,
        output: &mut impl Write,
        width: u32,
        height: u32,
        pixels: &[u32],
    ) -> Result<()> {
        if pixels.len() != width as usize * height as usize {
            return Err(Error::PixelCountMismatch {
                count: pixels.len(),
                width,
                height,
            });
        }

        writeln!(output, "#ifndef {}", self.guard)?;
        writeln!(output, "#define {}", self.guard)?;
        writeln!(output)?;
        writeln!(output, "#include <stdint.h>")?;
        writeln!(output)?;
        writeln!(output, "#define {} {width}", self.width_macro)?;
        writeln!(output, "#define {} {height}", self.height_macro)?;
        writeln!(output)?;
        writeln!(
            output,
            "static const uint32_t {}[{}] = {{",
            self.pixel_array,
            pixels.len()
        )?;
        // chunks panics on a zero chunk size
        for line in pixels.chunks(self.values_per_line.max(1)) {
            let line = line
                .iter()
                .map(|argb| format!("{argb:#010x}"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(output, "  {line},")?;
        }
        writeln!(output, "}};")?;
        writeln!(output)?;
        writeln!(output, "#endif")?;

        Ok(())
    }
}
