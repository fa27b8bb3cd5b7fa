//! Clip circle and image transform for a magnified circular inset.
//!
//! The source image is first scaled so that it exactly covers the canvas
//! (the *base fit*). The magnified inset scales it further about the canvas
//! origin, then shifts it back so the content under the anchor stays put:
//!
//! ```text
//! base_fit    = canvas / source
//! transform   = T(−anchor × (m − 1)) · S(base_fit) · S(m)
//! ```
//!
//! With `m = 1` the translation vanishes and the transform is the base fit.

use glam::{Affine2, Vec2};

use crate::error::{LoupeError, Result};
use crate::geometry::{Circle, NormalizedPoint, Size, anchor_to_pixels};
use crate::transform::magnification::Magnification;

/// Everything needed to draw one loupe, computed before touching a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoupeGeometry {
    /// Shared by the clip and the border stroke.
    pub circle: Circle,
    /// Scale mapping the unmagnified source onto the canvas.
    pub base_fit: Vec2,
    /// Net scale of the inset content, `base_fit × m`.
    pub content_scale: Vec2,
    /// Canvas-space offset that pins the anchor in place.
    pub translation: Vec2,
    /// Source-to-canvas transform used for the inset blit.
    pub transform: Affine2,
}

impl LoupeGeometry {
    /// Compute the clip circle and inset transform.
    ///
    /// Fails on a zero-sized source or canvas and on a radius that is not a
    /// finite positive number.
    pub fn compute(
        source: Size,
        canvas: Size,
        anchor: NormalizedPoint,
        radius: f32,
        magnification: Magnification,
    ) -> Result<Self> {
        if source.is_empty() {
            return Err(LoupeError::DegenerateSource {
                width: source.width,
                height: source.height,
            });
        }
        if canvas.is_empty() {
            return Err(LoupeError::DegenerateCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LoupeError::InvalidRadius(radius));
        }

        let center = anchor_to_pixels(anchor, canvas);
        let base_fit = canvas.as_vec2() / source.as_vec2();
        let m = magnification.get();
        let translation = -center * (m - 1.0);

        // reset → pre-scale(base fit) → pre-scale(m) → post-translate
        let transform = Affine2::from_translation(translation)
            * Affine2::from_scale(base_fit)
            * Affine2::from_scale(Vec2::splat(m));

        Ok(Self {
            circle: Circle::new(center, radius),
            base_fit,
            content_scale: base_fit * m,
            translation,
            transform,
        })
    }

    /// The unmagnified source-to-canvas transform.
    pub fn base_fit_transform(&self) -> Affine2 {
        Affine2::from_scale(self.base_fit)
    }

    /// Source-space coordinates of the pixel under the anchor in the base fit.
    pub fn source_point_under_anchor(&self) -> Vec2 {
        self.circle.center / self.base_fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    /// Relative comparison; coordinates here reach the thousands.
    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() <= EPSILON * b.abs().max_element().max(1.0)
    }

    #[test]
    fn test_reference_scenario() {
        let g = LoupeGeometry::compute(
            Size::new(100, 200),
            Size::new(400, 400),
            NormalizedPoint::CENTER,
            50.0,
            Magnification::new(2.0).expect("valid"),
        )
        .expect("valid geometry");

        assert_eq!(g.base_fit, Vec2::new(4.0, 2.0));
        assert_eq!(g.circle.center, Vec2::new(200.0, 200.0));
        assert_eq!(g.circle.radius, 50.0);
        assert_eq!(g.content_scale, Vec2::new(8.0, 4.0));
        assert_eq!(g.translation, Vec2::new(-200.0, -200.0));
        assert_eq!(g.transform.matrix2.x_axis, Vec2::new(8.0, 0.0));
        assert_eq!(g.transform.matrix2.y_axis, Vec2::new(0.0, 4.0));
        assert_eq!(g.transform.translation, Vec2::new(-200.0, -200.0));
    }

    #[test]
    fn test_unit_magnification_is_base_fit() {
        let g = LoupeGeometry::compute(
            Size::new(320, 640),
            Size::new(1080, 1920),
            NormalizedPoint::new(0.3, 0.8),
            90.0,
            Magnification::NONE,
        )
        .expect("valid geometry");

        assert_eq!(g.translation, Vec2::ZERO);
        assert_eq!(g.content_scale, g.base_fit);
        assert_eq!(g.transform, g.base_fit_transform());
    }

    #[test]
    fn test_anchor_is_fixed_point_of_zoom() {
        for &m in &[1.0, 1.5, 2.0, 4.0, 7.25] {
            for &(u, v) in &[(0.5, 0.5), (0.1, 0.9), (0.0, 0.0), (1.0, 1.0)] {
                let g = LoupeGeometry::compute(
                    Size::new(360, 640),
                    Size::new(720, 1280),
                    NormalizedPoint::new(u, v),
                    40.0,
                    Magnification::new(m).expect("valid"),
                )
                .expect("valid geometry");

                let anchor = g.circle.center;
                let source = g.source_point_under_anchor();
                assert!(approx(g.base_fit_transform().transform_point2(source), anchor));
                assert!(approx(g.transform.transform_point2(source), anchor));

                let back = g.transform.inverse().transform_point2(anchor);
                assert!(approx(g.transform.transform_point2(back), anchor));
                assert!(approx(back, source));
            }
        }
    }

    #[test]
    fn test_corner_anchors_need_no_special_case() {
        let m = Magnification::new(3.0).expect("valid");
        let top_left = LoupeGeometry::compute(
            Size::new(50, 50),
            Size::new(100, 100),
            NormalizedPoint::ORIGIN,
            30.0,
            m,
        )
        .expect("valid geometry");
        assert_eq!(top_left.circle.center, Vec2::ZERO);
        assert_eq!(top_left.translation, Vec2::ZERO);

        let bottom_right = LoupeGeometry::compute(
            Size::new(50, 50),
            Size::new(100, 100),
            NormalizedPoint::new(1.0, 1.0),
            30.0,
            m,
        )
        .expect("valid geometry");
        assert_eq!(bottom_right.circle.center, Vec2::new(100.0, 100.0));
        assert_eq!(bottom_right.translation, Vec2::new(-200.0, -200.0));
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let m = Magnification::DEFAULT;
        let anchor = NormalizedPoint::CENTER;

        assert!(matches!(
            LoupeGeometry::compute(Size::new(0, 10), Size::new(10, 10), anchor, 5.0, m),
            Err(LoupeError::DegenerateSource { width: 0, height: 10 })
        ));
        assert!(matches!(
            LoupeGeometry::compute(Size::new(10, 10), Size::new(10, 0), anchor, 5.0, m),
            Err(LoupeError::DegenerateCanvas { .. })
        ));
        assert!(matches!(
            LoupeGeometry::compute(Size::new(10, 10), Size::new(10, 10), anchor, 0.0, m),
            Err(LoupeError::InvalidRadius(_))
        ));
        assert!(
            LoupeGeometry::compute(Size::new(10, 10), Size::new(10, 10), anchor, f32::NAN, m)
                .is_err()
        );
    }
}
