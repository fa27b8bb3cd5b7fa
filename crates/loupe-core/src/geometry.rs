//! Resolution-independent points, pixel sizes and circles.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point expressed as a fraction of the canvas, nominally in `[0, 1]²`.
///
/// Values outside the unit square are kept as-is; projecting them simply
/// lands off-canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Horizontal fraction of the canvas width.
    pub x: f32,
    /// Vertical fraction of the canvas height.
    pub y: f32,
}

impl NormalizedPoint {
    /// Top-left corner.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);
    /// Centre of the canvas.
    pub const CENTER: Self = Self::new(0.5, 0.5);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates lie inside `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Project onto a canvas of the given size.
    pub fn to_pixels(self, canvas: Size) -> Vec2 {
        anchor_to_pixels(self, canvas)
    }
}

/// Width and height in pixels, for either a source image or a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Dimensions as floats, for geometry.
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// A circle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether `point` lies inside or on the circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// Map a normalized point onto a canvas.
///
/// ```text
/// px = x × width
/// py = y × height
/// ```
///
/// No clamping or rounding is applied.
pub fn anchor_to_pixels(point: NormalizedPoint, canvas: Size) -> Vec2 {
    Vec2::new(
        point.x * canvas.width as f32,
        point.y * canvas.height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_to_pixels_is_exact_product() {
        let canvas = Size::new(1080, 1920);
        for &(u, v) in &[(0.0, 0.0), (0.25, 0.75), (0.333, 0.1), (1.0, 1.0)] {
            let p = anchor_to_pixels(NormalizedPoint::new(u, v), canvas);
            assert_eq!(p.x, u * 1080.0);
            assert_eq!(p.y, v * 1920.0);
        }
    }

    #[test]
    fn test_anchor_to_pixels_does_not_clamp() {
        let p = NormalizedPoint::new(1.5, -0.25).to_pixels(Size::new(200, 100));
        assert_eq!(p, Vec2::new(300.0, -25.0));
    }

    #[test]
    fn test_is_normalized_bounds() {
        assert!(NormalizedPoint::ORIGIN.is_normalized());
        assert!(NormalizedPoint::new(1.0, 1.0).is_normalized());
        assert!(!NormalizedPoint::new(1.01, 0.5).is_normalized());
        assert!(!NormalizedPoint::new(0.5, f32::NAN).is_normalized());
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
        assert_eq!(Size::new(640, 480).to_string(), "640x480");
    }

    #[test]
    fn test_circle_contains() {
        let circle = Circle::new(Vec2::new(10.0, 10.0), 5.0);
        assert!(circle.contains(Vec2::new(10.0, 15.0)));
        assert!(!circle.contains(Vec2::new(16.0, 10.0)));
    }
}
