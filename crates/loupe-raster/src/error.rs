/// Errors raised by the raster backend and image helpers.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("cannot allocate {width}x{height} pixmap")]
    Allocation { width: u32, height: u32 },
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
