//! Settings resolution for the demo: config file, environment, flags.

use std::path::Path;

use loupe_core::{LoupeConfig, Magnification};

use crate::CliError;

/// Default display density when none is given (mdpi baseline).
const DEFAULT_DENSITY: f32 = 1.0;

/// Everything the demo needs beyond the annotation itself.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub loupe: LoupeConfig,
    /// Device pixels per dip.
    pub density: f32,
}

impl DemoConfig {
    /// Defaults, then the JSON file at `path`, then `LOUPE_*` variables, then
    /// explicit flag values.
    pub fn resolve(
        path: Option<&Path>,
        magnification: Option<f32>,
        density: Option<f32>,
    ) -> Result<Self, CliError> {
        Self::resolve_with(path, magnification, density, |key| std::env::var(key).ok())
    }

    /// [`DemoConfig::resolve`] with the environment supplied by `lookup`.
    pub fn resolve_with(
        path: Option<&Path>,
        magnification: Option<f32>,
        density: Option<f32>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let mut loupe = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                LoupeConfig::from_json_str(&json)?
            }
            None => LoupeConfig::default(),
        };
        loupe.apply_overrides(lookup);

        if let Some(m) = magnification {
            loupe.magnification = Magnification::new(m)?;
        }

        let density = density.unwrap_or(DEFAULT_DENSITY);
        if !density.is_finite() || density <= 0.0 {
            return Err(CliError::InvalidArgument(format!(
                "density must be positive, got {density}"
            )));
        }

        Ok(Self { loupe, density })
    }
}
