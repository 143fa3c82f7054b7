use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse the vector image: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("A raster of {width}x{height} pixels cannot be allocated.")]
    InvalidRasterSize { width: u32, height: u32 },

    #[error("A pixel with {channels} channels is not supported. Expected 3 or 4.")]
    UnsupportedChannelCount { channels: usize },

    #[error(
        "A sample buffer of {len} bytes does not divide into whole pixels of {channels} channels."
    )]
    TruncatedSampleBuffer { len: usize, channels: usize },

    #[error("{count} pixels do not fill a raster of {width}x{height} pixels.")]
    PixelCountMismatch { count: usize, width: u32, height: u32 },
}
