//! Magnifying-glass renderer.
//!
//! Draws a circular, magnified inset of the source bitmap centred on the
//! annotation's start point, then outlines it with the border stroke. The
//! radius is the projected distance from start to end.

use std::sync::Arc;

use glam::Affine2;
use image::RgbaImage;

use super::AnnotationRenderer;
use crate::annotation::Annotation;
use crate::config::LoupeConfig;
use crate::error::{LoupeError, Result};
use crate::geometry::{Circle, Size};
use crate::stroke::{DisplayMetrics, StrokeStyle};
use crate::surface::{DrawingSurface, SurfaceGuard};
use crate::transform::inset::LoupeGeometry;
use crate::transform::magnification::Magnification;

/// Renders loupe annotations over a shared screenshot.
///
/// The bitmap may arrive after construction; drawing before it does fails
/// with [`LoupeError::SourceNotReady`].
#[derive(Debug, Clone)]
pub struct LoupeRenderer {
    source: Option<Arc<RgbaImage>>,
    stroke: StrokeStyle,
    magnification: Magnification,
}

impl LoupeRenderer {
    /// Renderer with no source bitmap yet and the default magnification.
    pub fn new(stroke: StrokeStyle) -> Self {
        Self {
            source: None,
            stroke,
            magnification: Magnification::DEFAULT,
        }
    }

    pub fn with_source(source: Arc<RgbaImage>, stroke: StrokeStyle) -> Self {
        Self {
            source: Some(source),
            ..Self::new(stroke)
        }
    }

    pub fn from_config(config: &LoupeConfig, metrics: &DisplayMetrics) -> Result<Self> {
        Ok(Self::new(config.stroke(metrics)?).with_magnification(config.magnification))
    }

    pub fn with_magnification(mut self, magnification: Magnification) -> Self {
        self.magnification = magnification;
        self
    }

    pub fn magnification(&self) -> Magnification {
        self.magnification
    }

    pub fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    /// Replace the screenshot drawn inside the loupe.
    pub fn set_source_bitmap(&mut self, source: Arc<RgbaImage>) {
        self.source = Some(source);
    }

    pub fn source_bitmap(&self) -> Option<&Arc<RgbaImage>> {
        self.source.as_ref()
    }

    /// Clip circle and inset transform for `annotation` on a `canvas`-sized
    /// surface, without drawing anything.
    pub fn geometry(&self, annotation: &Annotation, canvas: Size) -> Result<LoupeGeometry> {
        let source = self.source()?;
        inset_geometry(source, annotation, canvas, self.magnification)
    }

    /// Diagnostic draw: same clip and border, but the content is the plain
    /// base fit with no magnification applied.
    pub fn draw_unmagnified(
        &self,
        annotation: &Annotation,
        surface: &mut dyn DrawingSurface,
    ) -> Result<()> {
        let source = self.source()?;
        let geometry = inset_geometry(source, annotation, surface.size(), Magnification::NONE)?;
        paint(
            surface,
            source,
            geometry.circle,
            geometry.base_fit_transform(),
            &self.stroke,
        )
    }

    fn source(&self) -> Result<&RgbaImage> {
        self.source.as_deref().ok_or(LoupeError::SourceNotReady)
    }
}

impl AnnotationRenderer for LoupeRenderer {
    fn draw(&self, annotation: &Annotation, surface: &mut dyn DrawingSurface) -> Result<()> {
        let source = self.source()?;
        let geometry = inset_geometry(source, annotation, surface.size(), self.magnification)?;
        tracing::debug!(
            "loupe at ({:.1}, {:.1}) r={:.1} m={} scale=({:.3}, {:.3})",
            geometry.circle.center.x,
            geometry.circle.center.y,
            geometry.circle.radius,
            self.magnification,
            geometry.content_scale.x,
            geometry.content_scale.y,
        );
        paint(
            surface,
            source,
            geometry.circle,
            geometry.transform,
            &self.stroke,
        )
    }
}

fn inset_geometry(
    source: &RgbaImage,
    annotation: &Annotation,
    canvas: Size,
    magnification: Magnification,
) -> Result<LoupeGeometry> {
    let (width, height) = source.dimensions();
    LoupeGeometry::compute(
        Size::new(width, height),
        canvas,
        annotation.start,
        annotation.radius(canvas),
        magnification,
    )
}

/// Clip, blit, outline. The same `circle` feeds both clip and border.
fn paint(
    surface: &mut dyn DrawingSurface,
    source: &RgbaImage,
    circle: Circle,
    transform: Affine2,
    stroke: &StrokeStyle,
) -> Result<()> {
    let mut surface = SurfaceGuard::new(surface);
    surface.clip_circle(circle)?;
    surface.draw_image(source, transform)?;
    surface.stroke_circle(circle, stroke)
}
