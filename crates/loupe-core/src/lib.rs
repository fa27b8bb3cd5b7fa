//! Loupe Core — domain layer for magnifying-glass annotations.
//!
//! This crate holds the loupe geometry (anchor projection, base-fit scale,
//! magnified inset transform), annotation data, stroke styling and the
//! drawing-surface seam. No rasteriser or I/O dependencies.

pub mod annotation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod stroke;
pub mod surface;
pub mod transform;

// Re-exports for convenience.
pub use annotation::Annotation;
pub use config::LoupeConfig;
pub use error::{LoupeError, Result};
pub use geometry::{Circle, NormalizedPoint, Size, anchor_to_pixels};
pub use render::{AnnotationRenderer, LoupeRenderer};
pub use stroke::{DisplayMetrics, StrokeStyle};
pub use surface::{DrawingSurface, RecordingSurface, SurfaceGuard, SurfaceOp};
pub use transform::inset::LoupeGeometry;
pub use transform::magnification::Magnification;
