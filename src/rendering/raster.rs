//! Executes a scene's draw list on a pixel canvas and encodes the PNG.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::error::{Error, Result};
use crate::rendering::paint::{PaintCommand, Scene};
use crate::rendering::Diagram;

/// Rasterize a scene into an encoded in-memory PNG buffer.
///
/// The canvas is clamped to at least one pixel per axis so an empty scene
/// still encodes to a valid image. Drawing is plain pixel writes, no
/// anti-aliasing; command colors land on the canvas exactly.
pub fn rasterize(scene: &Scene, background: crate::Rgba) -> Result<Diagram> {
    let width = scene.width.max(1);
    let height = scene.height.max(1);
    let mut canvas = RgbaImage::from_pixel(width, height, color(background));

    for cmd in &scene.commands {
        match *cmd {
            PaintCommand::FilledRect { x, y, width, height, rgba } => {
                if width == 0 || height == 0 {
                    continue;
                }
                draw_filled_rect_mut(&mut canvas, Rect::at(x, y).of_size(width, height), color(rgba));
            }
            PaintCommand::OutlineRect { x, y, width, height, rgba } => {
                if width == 0 || height == 0 {
                    continue;
                }
                draw_hollow_rect_mut(&mut canvas, Rect::at(x, y).of_size(width, height), color(rgba));
            }
            PaintCommand::Line { x0, y0, x1, y1, rgba } => {
                draw_line_segment_mut(&mut canvas, (x0, y0), (x1, y1), color(rgba));
            }
        }
    }

    log::debug!("rasterized {}x{} canvas, {} commands", width, height, scene.commands.len());

    let mut png_data = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)
        .map_err(|e| Error::RenderError(format!("PNG encoding failed: {}", e)))?;

    Ok(Diagram { width, height, png_data })
}

fn color(rgba: crate::Rgba) -> image::Rgba<u8> {
    image::Rgba([rgba.0, rgba.1, rgba.2, rgba.3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_encodes_a_valid_png() {
        let scene = Scene {
            width: 64,
            height: 32,
            commands: Vec::new(),
        };
        let d = rasterize(&scene, (255, 255, 255, 255)).expect("rasterize");
        assert_eq!(d.width, 64);
        assert_eq!(d.height, 32);
        assert_eq!(&d.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn zero_size_scene_clamps_to_one_pixel() {
        let scene = Scene {
            width: 0,
            height: 0,
            commands: Vec::new(),
        };
        let d = rasterize(&scene, (255, 255, 255, 255)).expect("rasterize");
        assert_eq!(d.width, 1);
        assert_eq!(d.height, 1);
    }

    #[test]
    fn filled_rect_lands_on_the_canvas() {
        let scene = Scene {
            width: 16,
            height: 16,
            commands: vec![PaintCommand::FilledRect {
                x: 4,
                y: 4,
                width: 8,
                height: 8,
                rgba: (10, 20, 30, 255),
            }],
        };
        let d = rasterize(&scene, (255, 255, 255, 255)).expect("rasterize");

        let img = image::load_from_memory(&d.png_data).expect("decode").to_rgba8();
        assert_eq!(img.get_pixel(8, 8).0, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}
