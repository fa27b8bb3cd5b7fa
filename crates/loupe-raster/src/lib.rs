//! CPU raster backend for Loupe.
//!
//! Implements `loupe_core::DrawingSurface` over a `tiny-skia` pixmap and
//! provides the image load/encode helpers the core deliberately lacks.

mod error;
mod image_io;
mod pixmap_surface;

pub use error::RasterError;
pub use image_io::{encode_png, load_image, save_png};
pub use pixmap_surface::{PixmapSurface, to_skia};
