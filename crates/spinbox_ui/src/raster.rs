//! Software raster backend
//!
//! Replays a frame's [`DrawCommand`] list into an RGBA pixmap with tiny-skia,
//! shaping and blending text with cosmic-text, then packs the result into the
//! `0RGB` `u32` layout the window surface expects.

use cosmic_text::{
    Attrs, Buffer, Color as CosmicColor, Family, FontSystem, Metrics, Shaping, SwashCache,
};
use tiny_skia::{
    Color as SkiaColor, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::renderer::{Color, DrawCommand};

/// CPU rasterizer. Holds the font system and glyph cache across frames so
/// shaping stays warm.
pub struct Rasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Rasterize a command list into a `width * height` buffer of `0RGB`
    /// pixels, clearing to `clear` first. A zero-sized frame yields an empty
    /// buffer.
    pub fn render(
        &mut self,
        commands: &[DrawCommand],
        width: u32,
        height: u32,
        clear: Color,
    ) -> Vec<u32> {
        let Some(mut pixmap) = Pixmap::new(width, height) else {
            return Vec::new();
        };
        pixmap.fill(to_skia(clear));

        for command in commands {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    if let Some(r) = Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
                        let mut paint = Paint::default();
                        set_color(&mut paint, *color);
                        pixmap.fill_rect(r, &paint, Transform::identity(), None);
                    }
                }
                DrawCommand::StrokeRect { rect, color, width } => {
                    if let Some(r) = Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
                        let path = PathBuilder::from_rect(r);
                        let mut paint = Paint::default();
                        set_color(&mut paint, *color);
                        let stroke = Stroke {
                            width: *width,
                            ..Stroke::default()
                        };
                        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                    }
                }
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    let mut builder = PathBuilder::new();
                    builder.move_to(from.0, from.1);
                    builder.line_to(to.0, to.1);
                    if let Some(path) = builder.finish() {
                        let mut paint = Paint::default();
                        set_color(&mut paint, *color);
                        let stroke = Stroke {
                            width: *width,
                            ..Stroke::default()
                        };
                        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
                    }
                }
                DrawCommand::Triangle { points, color } => {
                    let mut builder = PathBuilder::new();
                    builder.move_to(points[0].0, points[0].1);
                    builder.line_to(points[1].0, points[1].1);
                    builder.line_to(points[2].0, points[2].1);
                    builder.close();
                    if let Some(path) = builder.finish() {
                        let mut paint = Paint::default();
                        set_color(&mut paint, *color);
                        paint.anti_alias = true;
                        pixmap.fill_path(
                            &path,
                            &paint,
                            FillRule::Winding,
                            Transform::identity(),
                            None,
                        );
                    }
                }
                DrawCommand::Text {
                    content,
                    x,
                    y,
                    size,
                    color,
                } => {
                    self.draw_text(&mut pixmap, content, *x, *y, *size, *color);
                }
            }
        }

        pack_0rgb(&pixmap)
    }

    /// Shape `content` at `(x, y)` (top-left of the line box) and alpha-blend
    /// the glyph coverage into the pixmap.
    fn draw_text(
        &mut self,
        pixmap: &mut Pixmap,
        content: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    ) {
        let width = pixmap.width();
        let height = pixmap.height();
        let metrics = Metrics::new(size, size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, Some(width as f32 - x), None);

        let attrs = Attrs::new().family(Family::SansSerif);
        buffer.set_text(&mut self.font_system, content, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let text_color = CosmicColor::rgba(
            (color.r * 255.0) as u8,
            (color.g * 255.0) as u8,
            (color.b * 255.0) as u8,
            (color.a * 255.0) as u8,
        );

        let origin_x = x as i32;
        let origin_y = y as i32;
        let data = pixmap.data_mut();

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            text_color,
            |gx, gy, gw, gh, glyph_color| {
                let alpha = glyph_color.a() as f32 / 255.0;
                if alpha <= 0.0 {
                    return;
                }
                for dy in 0..gh {
                    for dx in 0..gw {
                        let px = origin_x + gx + dx as i32;
                        let py = origin_y + gy + dy as i32;
                        if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                            continue;
                        }
                        let idx = ((py as u32 * width + px as u32) * 4) as usize;
                        data[idx] = blend(data[idx], glyph_color.r(), alpha);
                        data[idx + 1] = blend(data[idx + 1], glyph_color.g(), alpha);
                        data[idx + 2] = blend(data[idx + 2], glyph_color.b(), alpha);
                        data[idx + 3] = data[idx + 3].max((alpha * 255.0) as u8);
                    }
                }
            },
        );
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

fn blend(dst: u8, src: u8, alpha: f32) -> u8 {
    (dst as f32 * (1.0 - alpha) + src as f32 * alpha) as u8
}

fn to_skia(color: Color) -> SkiaColor {
    SkiaColor::from_rgba(
        color.r.clamp(0.0, 1.0),
        color.g.clamp(0.0, 1.0),
        color.b.clamp(0.0, 1.0),
        color.a.clamp(0.0, 1.0),
    )
    .unwrap_or(SkiaColor::BLACK)
}

fn set_color(paint: &mut Paint<'_>, color: Color) {
    paint.set_color_rgba8(
        (color.r.clamp(0.0, 1.0) * 255.0) as u8,
        (color.g.clamp(0.0, 1.0) * 255.0) as u8,
        (color.b.clamp(0.0, 1.0) * 255.0) as u8,
        (color.a.clamp(0.0, 1.0) * 255.0) as u8,
    );
}

/// Convert the RGBA pixmap into the `0RGB` words softbuffer presents.
fn pack_0rgb(pixmap: &Pixmap) -> Vec<u32> {
    pixmap
        .pixels()
        .iter()
        .map(|p| {
            let c = p.demultiply();
            ((c.red() as u32) << 16) | ((c.green() as u32) << 8) | c.blue() as u32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Bounds;

    #[test]
    fn empty_frame_yields_empty_buffer() {
        let mut raster = Rasterizer::new();
        let pixels = raster.render(&[], 0, 0, Color::BLACK);
        assert!(pixels.is_empty());
    }

    #[test]
    fn clear_color_fills_frame() {
        let mut raster = Rasterizer::new();
        let pixels = raster.render(&[], 2, 2, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(pixels.len(), 4);
        for px in pixels {
            assert_eq!(px, 0x00FF_0000);
        }
    }

    #[test]
    fn fill_rect_writes_pixels() {
        let mut raster = Rasterizer::new();
        let commands = [DrawCommand::FillRect {
            rect: Bounds::new(0.0, 0.0, 2.0, 2.0),
            color: Color::rgb(0.0, 1.0, 0.0),
        }];
        let pixels = raster.render(&commands, 4, 4, Color::BLACK);
        assert_eq!(pixels[0], 0x0000_FF00);
        assert_eq!(pixels[15], 0x0000_0000);
    }
}
