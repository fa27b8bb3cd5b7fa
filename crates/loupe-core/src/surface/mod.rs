//! Drawing-surface seam between renderers and a concrete rasteriser.
//!
//! Renderers only ever talk to [`DrawingSurface`]; the CPU backend lives in
//! `loupe-raster`, and [`RecordingSurface`] captures calls for inspection.

pub mod guard;
pub mod recording;

use glam::Affine2;
use image::RgbaImage;

use crate::error::Result;
use crate::geometry::{Circle, Size};
use crate::stroke::StrokeStyle;

pub use guard::SurfaceGuard;
pub use recording::{RecordingSurface, SurfaceOp};

/// Immediate-mode 2D drawing target.
///
/// State is saved and restored with stack discipline; everything between a
/// `save` and its `restore` (clip changes included) is undone by the
/// `restore`. Prefer [`SurfaceGuard`] over calling the pair by hand.
pub trait DrawingSurface {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Push the current graphics state.
    fn save(&mut self);

    /// Pop the most recently saved graphics state.
    fn restore(&mut self);

    /// Intersect the current clip with the interior of `circle`.
    fn clip_circle(&mut self, circle: Circle) -> Result<()>;

    /// Draw `image` mapped into surface space by `transform`, under the clip.
    fn draw_image(&mut self, image: &RgbaImage, transform: Affine2) -> Result<()>;

    /// Outline `circle` with `stroke`, under the clip. Never filled.
    fn stroke_circle(&mut self, circle: Circle, stroke: &StrokeStyle) -> Result<()>;

    /// Width and height together.
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}
