//! Rendering pipeline: tiling plan in, encoded raster out.

pub mod paint;
pub mod raster;

use crate::error::Result;
use crate::tiling::TilingPlan;
use crate::DiagramConfig;

/// An encoded raster frame depicting one tiling layout
#[derive(Debug, Clone)]
pub struct Diagram {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Render the plan to an in-memory PNG.
///
/// The canvas is sized to the coverage area with equal aspect ratio, whole
/// and cut sheets get distinct fill/edge styles, and the area is outlined.
/// A zero-size area still yields a valid margin-only canvas.
pub fn render_diagram(plan: &TilingPlan, config: &DiagramConfig) -> Result<Diagram> {
    let scene = paint::build_scene(plan, config);
    raster::rasterize(&scene, config.background)
}
