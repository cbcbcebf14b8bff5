//! Software rasteriser writing a [`Scene`] into an RGBA8 frame.

use pocket_ui::{CHAR_WIDTH_FACTOR, LINE_HEIGHT_FACTOR};
use pocket_ui_graphics::{Color, Rect};
use rusttype::{point, Font, Scale};

use crate::scene::{DrawShape, Scene, TextDraw};

pub(crate) const CLEAR_COLOR: [u8; 4] = [245, 245, 247, 255];

/// Target frame in physical pixels; the scene is scaled by `scale`.
pub(crate) struct Frame<'a> {
    pub pixels: &'a mut [u8],
    pub width: u32,
    pub height: u32,
    pub scale: f32,
}

pub(crate) fn draw_scene(frame: &mut Frame<'_>, scene: &Scene, font: Option<&Font<'static>>) {
    for chunk in frame.pixels.chunks_exact_mut(4) {
        chunk.copy_from_slice(&CLEAR_COLOR);
    }

    let mut shapes: Vec<&DrawShape> = scene.shapes().iter().collect();
    shapes.sort_by_key(|shape| shape.z_index);
    let mut texts: Vec<&TextDraw> = scene.texts().iter().collect();
    texts.sort_by_key(|text| text.z_index);

    // Interleave by z index so a card drawn after a label covers it.
    let mut texts = texts.into_iter().peekable();
    for shape in shapes {
        while let Some(text) = texts.next_if(|text| text.z_index < shape.z_index) {
            draw_text(frame, text, font);
        }
        draw_shape(frame, shape);
    }
    for text in texts {
        draw_text(frame, text, font);
    }
}

fn draw_shape(frame: &mut Frame<'_>, draw: &DrawShape) {
    let rect = draw.rect.scale(frame.scale);
    let radius = draw.corner_radius * frame.scale;
    let color = color_to_rgba(draw.color);
    if color[3] <= 0.0 {
        return;
    }
    let start_x = rect.x.max(0.0) as u32;
    let start_y = rect.y.max(0.0) as u32;
    let end_x = rect.right().min(frame.width as f32).max(0.0).ceil() as u32;
    let end_y = rect.bottom().min(frame.height as f32).max(0.0).ceil() as u32;
    for py in start_y..end_y.min(frame.height) {
        for px in start_x..end_x.min(frame.width) {
            let point_x = px as f32 + 0.5;
            let point_y = py as f32 + 0.5;
            if point_in_round_rect(rect, radius, point_x, point_y) {
                blend(frame, px, py, color, color[3]);
            }
        }
    }
}

fn draw_text(frame: &mut Frame<'_>, draw: &TextDraw, font: Option<&Font<'static>>) {
    let color = color_to_rgba(draw.color);
    let Some(font) = font else {
        draw_placeholder_glyphs(frame, draw, color);
        return;
    };
    let size = draw.font_size * frame.scale;
    let origin_x = draw.rect.x * frame.scale;
    let origin_y = draw.rect.y * frame.scale;
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let line_height = size * LINE_HEIGHT_FACTOR;
    for (line_index, line) in draw.text.split('\n').enumerate() {
        let baseline = origin_y + line_index as f32 * line_height + v_metrics.ascent;
        for glyph in font.layout(line, scale, point(origin_x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px as u32 >= frame.width || py as u32 >= frame.height {
                    return;
                }
                blend(frame, px as u32, py as u32, color, coverage * color[3]);
            });
        }
    }
}

/// Without a font each character becomes a small filled box so text
/// placement stays visible.
fn draw_placeholder_glyphs(frame: &mut Frame<'_>, draw: &TextDraw, color: [f32; 4]) {
    let size = draw.font_size;
    let advance = size * CHAR_WIDTH_FACTOR;
    let line_height = size * LINE_HEIGHT_FACTOR;
    let fill = Color(color[0], color[1], color[2], color[3] * 0.8);
    for (line_index, line) in draw.text.split('\n').enumerate() {
        let top = draw.rect.y + line_index as f32 * line_height;
        for (column, ch) in line.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let glyph = DrawShape {
                rect: Rect::new(
                    draw.rect.x + column as f32 * advance + advance * 0.15,
                    top + size * 0.3,
                    advance * 0.7,
                    size * 0.7,
                ),
                color: fill,
                corner_radius: 0.0,
                z_index: draw.z_index,
            };
            draw_shape(frame, &glyph);
        }
    }
}

fn blend(frame: &mut Frame<'_>, px: u32, py: u32, color: [f32; 4], alpha: f32) {
    let idx = ((py * frame.width + px) * 4) as usize;
    let Some(existing) = frame.pixels.get_mut(idx..idx + 4) else {
        return;
    };
    let alpha = alpha.clamp(0.0, 1.0);
    for i in 0..3 {
        let dst = existing[i] as f32 / 255.0;
        let blended = color[i] * alpha + dst * (1.0 - alpha);
        existing[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    let dst_alpha = existing[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    existing[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
}

fn color_to_rgba(color: Color) -> [f32; 4] {
    [
        color.0.clamp(0.0, 1.0),
        color.1.clamp(0.0, 1.0),
        color.2.clamp(0.0, 1.0),
        color.3.clamp(0.0, 1.0),
    ]
}

pub(crate) fn point_in_round_rect(rect: Rect, radius: f32, x: f32, y: f32) -> bool {
    if !rect.contains(x, y) {
        return false;
    }
    let radius = radius.max(0.0).min(rect.width / 2.0).min(rect.height / 2.0);
    if radius <= 0.0 {
        return true;
    }
    // Distance from the rectangle shrunk by the radius on every side.
    let cx = x.clamp(rect.x + radius, rect.right() - radius);
    let cy = y.clamp(rect.y + radius, rect.bottom() - radius);
    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= radius * radius
}

#[cfg(test)]
#[path = "tests/raster_tests.rs"]
mod tests;
