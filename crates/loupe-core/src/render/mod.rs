//! Annotation renderers.

pub mod loupe;

use crate::annotation::Annotation;
use crate::error::Result;
use crate::surface::DrawingSurface;

pub use loupe::LoupeRenderer;

/// Anything that can draw an annotation onto a surface.
///
/// Implementations must leave the surface's saved state as they found it,
/// whether they succeed or fail.
pub trait AnnotationRenderer {
    fn draw(&self, annotation: &Annotation, surface: &mut dyn DrawingSurface) -> Result<()>;
}
