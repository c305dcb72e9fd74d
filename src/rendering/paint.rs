//! Paint command construction for tiling diagrams.
//!
//! Turns a plan's unit-space placements into a flat pixel-space draw list.
//! Everything scale-dependent happens here; the rasterizer just executes
//! commands.

use crate::tiling::TilingPlan;
use crate::{DiagramConfig, Rgba};

/// A single drawing operation in pixel space
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FilledRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    OutlineRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        rgba: Rgba,
    },
}

/// Pixel-space draw list plus the canvas it targets
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<PaintCommand>,
}

/// Build the draw list for a plan.
///
/// The longest area edge is scaled to `config.canvas_size` pixels and both
/// axes share that scale, so shapes are never distorted. Unit coordinates
/// have the y axis pointing up; pixel rows grow downward, so rectangles
/// are flipped on the way through. Draw order: grid, sheets, area outline.
pub fn build_scene(plan: &TilingPlan, config: &DiagramConfig) -> Scene {
    let area = plan.area;
    let long_edge = area.width.max(area.height);
    let scale = if long_edge == 0 {
        0.0
    } else {
        f64::from(config.canvas_size) / f64::from(long_edge)
    };

    let width = px_extent(area.width, scale, config.margin);
    let height = px_extent(area.height, scale, config.margin);

    let mut commands = Vec::new();
    if area.width == 0 || area.height == 0 {
        // Degenerate area: an empty canvas, not an error.
        return Scene { width, height, commands };
    }

    // Map one unit coordinate to a pixel edge. Mapping each edge
    // independently keeps adjacent rectangles seamless after rounding.
    let px = |u: u32| -> i32 { config.margin as i32 + (f64::from(u) * scale).round() as i32 };
    let py = |u: u32| -> i32 {
        config.margin as i32 + (f64::from(area.height - u) * scale).round() as i32
    };

    if config.draw_grid {
        let step = config
            .grid_step
            .unwrap_or_else(|| auto_step(long_edge))
            .max(1);

        let (top, bottom) = (py(area.height) as f32, py(0) as f32);
        let mut t = u64::from(step);
        while t < u64::from(area.width) {
            let x = px(t as u32) as f32;
            commands.push(PaintCommand::Line {
                x0: x,
                y0: top,
                x1: x,
                y1: bottom,
                rgba: config.grid_color,
            });
            t += u64::from(step);
        }

        let (left, right) = (px(0) as f32, px(area.width) as f32);
        let mut t = u64::from(step);
        while t < u64::from(area.height) {
            let y = py(t as u32) as f32;
            commands.push(PaintCommand::Line {
                x0: left,
                y0: y,
                x1: right,
                y1: y,
                rgba: config.grid_color,
            });
            t += u64::from(step);
        }
    }

    for placement in plan.placements() {
        let x0 = px(placement.x);
        let x1 = px(placement.x + placement.width);
        let y0 = py(placement.y + placement.height);
        let y1 = py(placement.y);
        let (w, h) = ((x1 - x0) as u32, (y1 - y0) as u32);
        if w == 0 || h == 0 {
            // Sub-pixel at this scale; nothing to draw.
            continue;
        }

        let (fill, edge) = if placement.kind.is_cut() {
            (config.cut_fill, config.cut_edge)
        } else {
            (config.full_fill, config.full_edge)
        };
        commands.push(PaintCommand::FilledRect {
            x: x0,
            y: y0,
            width: w,
            height: h,
            rgba: fill,
        });
        commands.push(PaintCommand::OutlineRect {
            x: x0,
            y: y0,
            width: w,
            height: h,
            rgba: edge,
        });
    }

    // 2 px area outline as two concentric hollow rectangles.
    let (x0, y0) = (px(0), py(area.height));
    let (w, h) = ((px(area.width) - x0) as u32, (py(0) - y0) as u32);
    for inset in 0..2u32 {
        if w > 2 * inset && h > 2 * inset {
            commands.push(PaintCommand::OutlineRect {
                x: x0 + inset as i32,
                y: y0 + inset as i32,
                width: w - 2 * inset,
                height: h - 2 * inset,
                rgba: config.outline,
            });
        }
    }

    Scene { width, height, commands }
}

fn px_extent(units: u32, scale: f64, margin: u32) -> u32 {
    let body = (f64::from(units) * scale).round() as u32;
    (body + margin * 2).max(1)
}

/// Pick a round grid step (1, 2 or 5 times a power of ten) that yields on
/// the order of eight lines across the long edge.
fn auto_step(long_edge: u32) -> u32 {
    let target = (u64::from(long_edge) / 8).max(1);
    let mut base = 1u64;
    loop {
        for mult in [1u64, 2, 5] {
            let step = base * mult;
            if step >= target {
                return step.min(u64::from(u32::MAX)) as u32;
            }
        }
        base *= 10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimensions;

    fn scene(config: &DiagramConfig) -> Scene {
        let plan = TilingPlan::compute(Dimensions::new(30, 60), Dimensions::new(400, 400))
            .expect("valid plan");
        build_scene(&plan, config)
    }

    #[test]
    fn canvas_size_follows_config() {
        let config = DiagramConfig {
            canvas_size: 600,
            margin: 10,
            ..Default::default()
        };
        let s = scene(&config);
        assert_eq!(s.width, 620);
        assert_eq!(s.height, 620);
    }

    #[test]
    fn tall_area_keeps_equal_aspect() {
        let plan = TilingPlan::compute(Dimensions::new(30, 60), Dimensions::new(100, 400))
            .expect("valid plan");
        let config = DiagramConfig {
            canvas_size: 400,
            margin: 0,
            ..Default::default()
        };
        let s = build_scene(&plan, &config);
        assert_eq!(s.height, 400);
        assert_eq!(s.width, 100);
    }

    #[test]
    fn zero_area_scene_is_empty() {
        let plan = TilingPlan::compute(Dimensions::new(30, 60), Dimensions::new(0, 0))
            .expect("valid plan");
        let config = DiagramConfig::default();
        let s = build_scene(&plan, &config);
        assert_eq!(s.width, config.margin * 2);
        assert_eq!(s.height, config.margin * 2);
        assert!(s.commands.is_empty());
    }

    #[test]
    fn full_and_cut_sheets_use_distinct_fills() {
        let config = DiagramConfig::default();
        let s = scene(&config);
        let fills = |rgba: Rgba| {
            s.commands
                .iter()
                .filter(|c| matches!(c, PaintCommand::FilledRect { rgba: r, .. } if *r == rgba))
                .count()
        };
        assert_eq!(fills(config.full_fill), 78);
        assert_eq!(fills(config.cut_fill), 20);
    }

    #[test]
    fn outline_is_drawn_last_and_two_deep() {
        let config = DiagramConfig::default();
        let s = scene(&config);
        let outline: Vec<_> = s
            .commands
            .iter()
            .rev()
            .take(2)
            .filter(|c| matches!(c, PaintCommand::OutlineRect { rgba, .. } if *rgba == config.outline))
            .collect();
        assert_eq!(outline.len(), 2);
    }

    #[test]
    fn grid_can_be_disabled() {
        let config = DiagramConfig {
            draw_grid: false,
            ..Default::default()
        };
        let s = scene(&config);
        assert!(!s
            .commands
            .iter()
            .any(|c| matches!(c, PaintCommand::Line { .. })));
    }

    #[test]
    fn auto_step_picks_round_values() {
        assert_eq!(auto_step(400), 50);
        assert_eq!(auto_step(8), 1);
        assert_eq!(auto_step(1000), 200);
    }
}
