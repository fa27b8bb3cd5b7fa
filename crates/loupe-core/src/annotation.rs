//! Annotation data consumed by renderers.

use serde::{Deserialize, Serialize};

use crate::geometry::{NormalizedPoint, Size};

/// A two-point annotation placed on a screenshot.
///
/// Both points are stored normalized so the annotation survives canvas
/// resizes. For a loupe, `start` is the centre and `end` lies on the rim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub start: NormalizedPoint,
    pub end: NormalizedPoint,
}

impl Annotation {
    pub const fn new(start: NormalizedPoint, end: NormalizedPoint) -> Self {
        Self { start, end }
    }

    /// Pixel distance between `start` and `end` on a canvas of `canvas` size.
    ///
    /// Measured after projection, so a horizontal drag on a wide canvas is
    /// longer than the same normalized drag on a narrow one.
    pub fn radius(&self, canvas: Size) -> f32 {
        self.start.to_pixels(canvas).distance(self.end.to_pixels(canvas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_radius_measures_projected_distance() {
        let annotation = Annotation::new(
            NormalizedPoint::new(0.5, 0.5),
            NormalizedPoint::new(0.5, 0.625),
        );
        assert!((annotation.radius(Size::new(400, 400)) - 50.0).abs() < EPSILON);
        assert!((annotation.radius(Size::new(400, 800)) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_radius_uses_both_axes() {
        let annotation = Annotation::new(NormalizedPoint::ORIGIN, NormalizedPoint::new(0.3, 0.4));
        assert!((annotation.radius(Size::new(100, 100)) - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_length_annotation_has_zero_radius() {
        let annotation = Annotation::new(NormalizedPoint::CENTER, NormalizedPoint::CENTER);
        assert_eq!(annotation.radius(Size::new(300, 200)), 0.0);
    }

    #[test]
    fn test_annotation_json_shape() {
        let json = r#"{"start":{"x":0.25,"y":0.5},"end":{"x":0.5,"y":0.5}}"#;
        let annotation: Annotation = serde_json::from_str(json).expect("valid annotation json");
        assert_eq!(annotation.start, NormalizedPoint::new(0.25, 0.5));
        assert_eq!(annotation.end, NormalizedPoint::new(0.5, 0.5));
    }
}
