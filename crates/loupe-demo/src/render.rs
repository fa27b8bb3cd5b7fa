//! Compose a screenshot and one loupe annotation into an output image.

use std::sync::Arc;

use image::RgbaImage;
use loupe_core::{
    Annotation, AnnotationRenderer, DisplayMetrics, DrawingSurface, LoupeRenderer, Size,
};
use loupe_raster::PixmapSurface;

use crate::CliError;
use crate::config::DemoConfig;

/// Draw `screenshot` fitted to `canvas`, then the loupe on top.
pub fn compose(
    screenshot: Arc<RgbaImage>,
    canvas: Size,
    annotation: &Annotation,
    config: &DemoConfig,
) -> Result<RgbaImage, CliError> {
    let metrics = DisplayMetrics::new(config.density);
    let mut renderer = LoupeRenderer::from_config(&config.loupe, &metrics)?;
    renderer.set_source_bitmap(Arc::clone(&screenshot));

    let mut surface = PixmapSurface::new(canvas.width, canvas.height)?;
    let geometry = renderer.geometry(annotation, canvas)?;
    surface.draw_image(&screenshot, geometry.base_fit_transform())?;

    tracing::info!(
        "drawing {} loupe at ({:.0}, {:.0}) r={:.1} on {canvas} canvas",
        renderer.magnification(),
        geometry.circle.center.x,
        geometry.circle.center.y,
        geometry.circle.radius,
    );
    renderer.draw(annotation, &mut surface)?;

    Ok(surface.into_image())
}
