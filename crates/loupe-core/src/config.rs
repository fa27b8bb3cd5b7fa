//! Loupe configuration: defaults, JSON files and environment overrides.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stroke::{BLACK, DEFAULT_STROKE_DIP, DisplayMetrics, StrokeStyle};
use crate::transform::magnification::Magnification;

/// Environment variable overriding the magnification factor.
pub const ENV_MAGNIFICATION: &str = "LOUPE_MAGNIFICATION";
/// Environment variable overriding the border width in dip.
pub const ENV_STROKE_DIP: &str = "LOUPE_STROKE_DIP";

/// Tunables for a loupe renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoupeConfig {
    /// Zoom applied on top of the base fit. Default: 2.
    pub magnification: Magnification,
    /// Border width in density-independent pixels. Default: 1.
    pub stroke_width_dip: f32,
    /// Border colour as straight RGBA. Default: opaque black.
    pub border_color: [u8; 4],
}

impl Default for LoupeConfig {
    fn default() -> Self {
        Self {
            magnification: Magnification::DEFAULT,
            stroke_width_dip: DEFAULT_STROKE_DIP,
            border_color: BLACK,
        }
    }
}

impl LoupeConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay values produced by `lookup` (keyed by the `ENV_*` names).
    ///
    /// Unparseable or out-of-range values are logged and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_MAGNIFICATION) {
            match raw.trim().parse::<f32>().map(Magnification::new) {
                Ok(Ok(m)) => self.magnification = m,
                _ => tracing::warn!("ignoring {ENV_MAGNIFICATION}={raw}: expected a number >= 1"),
            }
        }
        if let Some(raw) = lookup(ENV_STROKE_DIP) {
            match raw.trim().parse::<f32>() {
                Ok(dip) if dip.is_finite() && dip >= 0.0 => self.stroke_width_dip = dip,
                _ => tracing::warn!("ignoring {ENV_STROKE_DIP}={raw}: expected a non-negative number"),
            }
        }
    }

    /// Border stroke in device pixels for the given display.
    pub fn stroke(&self, metrics: &DisplayMetrics) -> Result<StrokeStyle> {
        StrokeStyle::with_color(metrics.to_pixels(self.stroke_width_dip), self.border_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoupeError;

    #[test]
    fn test_defaults() {
        let config = LoupeConfig::default();
        assert_eq!(config.magnification.get(), 2.0);
        assert_eq!(config.stroke_width_dip, 1.0);
        assert_eq!(config.border_color, BLACK);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LoupeConfig::from_json_str(r#"{"magnification": 3.0}"#).expect("valid json");
        assert_eq!(config.magnification.get(), 3.0);
        assert_eq!(config.stroke_width_dip, 1.0);
    }

    #[test]
    fn test_json_rejects_low_magnification() {
        let err = LoupeConfig::from_json_str(r#"{"magnification": 0.5}"#).unwrap_err();
        assert!(matches!(err, LoupeError::Config(_)));
    }

    #[test]
    fn test_overrides_apply_and_skip_garbage() {
        let mut config = LoupeConfig::default();
        config.apply_overrides(|key| match key {
            ENV_MAGNIFICATION => Some("4".to_string()),
            ENV_STROKE_DIP => Some("thick".to_string()),
            _ => None,
        });
        assert_eq!(config.magnification.get(), 4.0);
        assert_eq!(config.stroke_width_dip, 1.0);

        config.apply_overrides(|key| (key == ENV_MAGNIFICATION).then(|| "0.1".to_string()));
        assert_eq!(config.magnification.get(), 4.0);
    }

    #[test]
    fn test_stroke_uses_density_and_color() {
        let config = LoupeConfig {
            stroke_width_dip: 1.5,
            border_color: [255, 0, 0, 255],
            ..LoupeConfig::default()
        };
        let stroke = config.stroke(&DisplayMetrics::new(2.0)).expect("valid stroke");
        assert_eq!(stroke.width, 3.0);
        assert_eq!(stroke.color, [255, 0, 0, 255]);
    }
}
