//! Border stroke styling and density-independent unit conversion.

use serde::{Deserialize, Serialize};

use crate::error::{LoupeError, Result};

/// Default border width in density-independent pixels.
pub const DEFAULT_STROKE_DIP: f32 = 1.0;

/// Opaque black, the default border colour.
pub const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Display density information needed to turn dip into device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Device pixels per density-independent pixel (1.0 = 160 dpi baseline).
    pub density: f32,
}

impl DisplayMetrics {
    pub const fn new(density: f32) -> Self {
        Self { density }
    }

    /// Convert a density-independent length to device pixels.
    pub fn to_pixels(&self, dip: f32) -> f32 {
        dip * self.density
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

/// Stroke used to outline the loupe. Always drawn unfilled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Width in device pixels.
    pub width: f32,
    /// Straight (non-premultiplied) RGBA colour.
    pub color: [u8; 4],
}

impl StrokeStyle {
    /// Black stroke of `width` device pixels.
    pub fn new(width: f32) -> Result<Self> {
        Self::with_color(width, BLACK)
    }

    pub fn with_color(width: f32, color: [u8; 4]) -> Result<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(LoupeError::InvalidStrokeWidth(width));
        }
        Ok(Self { width, color })
    }

    /// Black stroke whose width is given in density-independent pixels.
    pub fn from_dip(dip: f32, metrics: &DisplayMetrics) -> Result<Self> {
        Self::new(metrics.to_pixels(dip))
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: DisplayMetrics::default().to_pixels(DEFAULT_STROKE_DIP),
            color: BLACK,
        }
    }
}
