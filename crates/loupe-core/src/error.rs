//! Error type shared by geometry, configuration and rendering.

/// Errors raised while computing or drawing an annotation.
#[derive(Debug, thiserror::Error)]
pub enum LoupeError {
    #[error("no source bitmap has been set")]
    SourceNotReady,
    #[error("source image has degenerate size {width}x{height}")]
    DegenerateSource { width: u32, height: u32 },
    #[error("canvas has degenerate size {width}x{height}")]
    DegenerateCanvas { width: u32, height: u32 },
    #[error("magnification must be finite and at least 1, got {0}")]
    InvalidMagnification(f32),
    #[error("loupe radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    #[error("stroke width must be finite and non-negative, got {0}")]
    InvalidStrokeWidth(f32),
    #[error("drawing surface error: {0}")]
    Surface(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LoupeError>;
