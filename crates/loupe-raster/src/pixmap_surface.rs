//! CPU drawing surface backed by a `tiny-skia` pixmap.

use glam::Affine2;
use image::RgbaImage;
use loupe_core::error::{LoupeError, Result};
use loupe_core::geometry::Circle;
use loupe_core::stroke::StrokeStyle;
use loupe_core::surface::DrawingSurface;
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

use crate::error::RasterError;

/// A [`DrawingSurface`] that rasterises into an RGBA pixmap.
///
/// The clip is a coverage mask; `save` snapshots it and `restore` puts the
/// snapshot back.
pub struct PixmapSurface {
    pixmap: Pixmap,
    clip: Option<Mask>,
    saved: Vec<Option<Mask>>,
}

impl PixmapSurface {
    /// Transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> std::result::Result<Self, RasterError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RasterError::Allocation { width, height })?;
        Ok(Self::from_pixmap(pixmap))
    }

    /// Surface initialised with a copy of `image`.
    pub fn from_image(image: &RgbaImage) -> std::result::Result<Self, RasterError> {
        Ok(Self::from_pixmap(pixmap_from_image(image)?))
    }

    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap,
            clip: None,
            saved: Vec::new(),
        }
    }

    /// Whether a clip is currently active.
    pub fn is_clipped(&self) -> bool {
        self.clip.is_some()
    }

    /// Number of saves not yet matched by a restore.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Straight-alpha copy of the current pixels.
    pub fn to_image(&self) -> RgbaImage {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(self.pixmap.width(), self.pixmap.height(), data)
            .unwrap_or_else(|| RgbaImage::new(self.pixmap.width(), self.pixmap.height()))
    }

    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }
}

impl DrawingSurface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn save(&mut self) {
        self.saved.push(self.clip.clone());
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(clip) => self.clip = clip,
            None => tracing::warn!("restore called without a matching save"),
        }
    }

    fn clip_circle(&mut self, circle: Circle) -> Result<()> {
        let path = circle_path(circle)?;
        match self.clip.as_mut() {
            Some(mask) => mask.intersect_path(&path, FillRule::Winding, true, Transform::identity()),
            None => {
                let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height())
                    .ok_or_else(|| LoupeError::Surface("cannot allocate clip mask".to_string()))?;
                mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
                self.clip = Some(mask);
            }
        }
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbaImage, transform: Affine2) -> Result<()> {
        let source = pixmap_from_image(image).map_err(|e| LoupeError::Surface(e.to_string()))?;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &paint,
            to_skia(transform),
            self.clip.as_ref(),
        );
        Ok(())
    }

    fn stroke_circle(&mut self, circle: Circle, stroke: &StrokeStyle) -> Result<()> {
        let path = circle_path(circle)?;
        let [r, g, b, a] = stroke.color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        let skia_stroke = Stroke {
            width: stroke.width,
            ..Default::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint,
            &skia_stroke,
            Transform::identity(),
            self.clip.as_ref(),
        );
        Ok(())
    }
}

/// glam's column-major affine to tiny-skia's row form.
pub fn to_skia(transform: Affine2) -> Transform {
    let m = transform.matrix2;
    let t = transform.translation;
    Transform::from_row(m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y, t.x, t.y)
}

fn circle_path(circle: Circle) -> Result<tiny_skia::Path> {
    PathBuilder::from_circle(circle.center.x, circle.center.y, circle.radius).ok_or_else(|| {
        LoupeError::Surface(format!("cannot build circle path (r={})", circle.radius))
    })
}

/// Premultiply an `RgbaImage` into a fresh pixmap.
pub(crate) fn pixmap_from_image(image: &RgbaImage) -> std::result::Result<Pixmap, RasterError> {
    let (width, height) = image.dimensions();
    let mut pixmap = Pixmap::new(width, height).ok_or(RasterError::Allocation { width, height })?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}
