//! Screenshot loading and PNG encoding.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::RasterError;

/// Load an image from disk as straight-alpha RGBA8.
///
/// Any format the `image` crate decodes is accepted; everything is converted
/// to RGBA8, which is what screenshots are drawn from.
pub fn load_image(path: &Path) -> Result<RgbaImage, RasterError> {
    let img = image::open(path).map_err(RasterError::Decode)?;
    tracing::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RasterError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(RasterError::Encode)?;
    Ok(buffer.into_inner())
}

/// Encode `image` as PNG and write it to `path`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), RasterError> {
    std::fs::write(path, encode_png(image)?)?;
    Ok(())
}
