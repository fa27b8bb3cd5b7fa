//! Validated zoom factor for the loupe inset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LoupeError, Result};

/// How much more zoomed-in the inset is than a 1:1 fit of the source.
///
/// Always finite and `>= 1`. Below 1 the anchor stops being a fixed point
/// of the zoom, so such values are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Magnification(f32);

impl Magnification {
    /// No zoom: the inset shows the base-fit image.
    pub const NONE: Self = Self(1.0);
    /// Zoom used when nothing else is configured.
    pub const DEFAULT: Self = Self(2.0);

    pub fn new(factor: f32) -> Result<Self> {
        if !factor.is_finite() || factor < 1.0 {
            return Err(LoupeError::InvalidMagnification(factor));
        }
        Ok(Self(factor))
    }

    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Default for Magnification {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for Magnification {
    type Error = LoupeError;

    fn try_from(factor: f32) -> Result<Self> {
        Self::new(factor)
    }
}

impl From<Magnification> for f32 {
    fn from(m: Magnification) -> Self {
        m.0
    }
}

impl fmt::Display for Magnification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×", self.0)
    }
}
