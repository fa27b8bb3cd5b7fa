//! Loupe Demo — render a magnifying-glass annotation onto a screenshot.
//!
//! Loads an image, fits it to the canvas, draws one loupe and writes a PNG.

mod config;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use loupe_core::{Annotation, LoupeError, NormalizedPoint, Size};
use loupe_raster::RasterError;

use crate::config::DemoConfig;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Loupe(#[from] LoupeError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Parser, Debug)]
#[command(name = "loupe", about = "Draw a magnifying-glass annotation onto a screenshot")]
struct Cli {
    /// Screenshot to annotate.
    input: PathBuf,

    /// Where to write the annotated PNG.
    output: PathBuf,

    /// Loupe centre as normalized `X,Y`.
    #[arg(long, value_parser = parse_point, default_value = "0.5,0.5")]
    anchor: NormalizedPoint,

    /// A point on the loupe rim as normalized `X,Y`.
    #[arg(long, value_parser = parse_point, default_value = "0.65,0.5")]
    edge: NormalizedPoint,

    /// Zoom factor, at least 1.
    #[arg(long)]
    magnification: Option<f32>,

    /// Device pixels per density-independent pixel.
    #[arg(long)]
    density: Option<f32>,

    /// Canvas size as `WxH`; defaults to the screenshot size.
    #[arg(long, value_parser = parse_size)]
    canvas: Option<Size>,

    /// JSON file with loupe settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_point(raw: &str) -> Result<NormalizedPoint, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{raw}`"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad y `{y}`: {e}"))?;
    Ok(NormalizedPoint::new(x, y))
}

fn parse_size(raw: &str) -> Result<Size, String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got `{raw}`"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width `{w}`: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height `{h}`: {e}"))?;
    Ok(Size::new(w, h))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = DemoConfig::resolve(cli.config.as_deref(), cli.magnification, cli.density)?;
    let screenshot = loupe_raster::load_image(&cli.input)?;
    let canvas = cli.canvas.unwrap_or_else(|| screenshot.dimensions().into());

    if !cli.anchor.is_normalized() || !cli.edge.is_normalized() {
        tracing::warn!("annotation points fall outside the unit square; loupe may be off-canvas");
    }

    let annotation = Annotation::new(cli.anchor, cli.edge);
    let out = render::compose(Arc::new(screenshot), canvas, &annotation, &config)?;
    loupe_raster::save_png(&out, &cli.output)?;
    tracing::info!("wrote {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("0.25, 0.75"), Ok(NormalizedPoint::new(0.25, 0.75)));
        assert!(parse_point("0.25").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1080x1920"), Ok(Size::new(1080, 1920)));
        assert_eq!(parse_size("640X480"), Ok(Size::new(640, 480)));
        assert!(parse_size("640").is_err());
        assert!(parse_size("-1x2").is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "loupe",
            "in.png",
            "out.png",
            "--anchor",
            "0.1,0.2",
            "--magnification",
            "3",
            "--canvas",
            "400x300",
        ])
        .expect("valid args");
        assert_eq!(cli.anchor, NormalizedPoint::new(0.1, 0.2));
        assert_eq!(cli.edge, NormalizedPoint::new(0.65, 0.5));
        assert_eq!(cli.magnification, Some(3.0));
        assert_eq!(cli.canvas, Some(Size::new(400, 300)));
    }
}
