//! A surface that records calls instead of rasterising them.

use glam::Affine2;
use image::RgbaImage;

use super::DrawingSurface;
use crate::error::{LoupeError, Result};
use crate::geometry::{Circle, Size};
use crate::stroke::StrokeStyle;

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Save,
    Restore,
    ClipCircle(Circle),
    DrawImage { size: Size, transform: Affine2 },
    StrokeCircle { circle: Circle, stroke: StrokeStyle },
}

/// Records every call in order. Useful for tests and for dumping the draw
/// sequence of a renderer while debugging.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<SurfaceOp>,
    depth: usize,
    fail_blits: bool,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// A surface whose `draw_image` always fails after recording the call.
    pub fn with_failing_blits(width: u32, height: u32) -> Self {
        Self {
            fail_blits: true,
            ..Self::new(width, height)
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the recorded calls, leaving the surface ready for another frame.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of saves not yet matched by a restore.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Every circle passed to `clip_circle`, in order.
    pub fn clip_circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::ClipCircle(c) => Some(*c),
            _ => None,
        })
    }

    /// Every circle passed to `stroke_circle`, in order.
    pub fn stroked_circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::StrokeCircle { circle, .. } => Some(*circle),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(SurfaceOp::Restore);
    }

    fn clip_circle(&mut self, circle: Circle) -> Result<()> {
        self.ops.push(SurfaceOp::ClipCircle(circle));
        Ok(())
    }

    fn draw_image(&mut self, image: &RgbaImage, transform: Affine2) -> Result<()> {
        let (width, height) = image.dimensions();
        self.ops.push(SurfaceOp::DrawImage {
            size: Size::new(width, height),
            transform,
        });
        if self.fail_blits {
            return Err(LoupeError::Surface("blit rejected".to_string()));
        }
        Ok(())
    }

    fn stroke_circle(&mut self, circle: Circle, stroke: &StrokeStyle) -> Result<()> {
        self.ops.push(SurfaceOp::StrokeCircle {
            circle,
            stroke: *stroke,
        });
        Ok(())
    }
}
