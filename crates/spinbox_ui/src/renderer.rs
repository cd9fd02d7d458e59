//! Draw-command recording
//!
//! Widgets describe a frame as a list of [`DrawCommand`]s; the renderer never
//! exposes the pixel buffer. The software backend in [`crate::raster`]
//! consumes the recorded commands once per frame.

use crate::layout::Bounds;

/// A draw command to be executed during rendering
#[derive(Debug, Clone)]
pub enum DrawCommand {
    FillRect {
        rect: Bounds,
        color: Color,
    },
    StrokeRect {
        rect: Bounds,
        color: Color,
        width: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },
    /// A filled triangle, used for arrow glyphs.
    Triangle {
        points: [(f32, f32); 3],
        color: Color,
    },
    Text {
        content: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

/// Records the draw commands for one frame.
pub struct Renderer {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl Renderer {
    /// Create a renderer for a surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Get the current surface size.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The commands recorded so far this frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Draw a filled rectangle.
    pub fn fill_rect(&mut self, rect: Bounds, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Draw a rectangle outline.
    pub fn stroke_rect(&mut self, rect: Bounds, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    /// Draw a line segment.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from: (x1, y1),
            to: (x2, y2),
            color,
            width,
        });
    }

    /// Draw a filled triangle.
    pub fn triangle(&mut self, points: [(f32, f32); 3], color: Color) {
        self.commands.push(DrawCommand::Triangle { points, color });
    }

    /// Draw text with its top-left corner at (x, y).
    pub fn text(&mut self, content: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            content: content.to_string(),
            x,
            y,
            size,
            color,
        });
    }
}

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Window background
    pub const PANEL_BG: Color = Color::rgb(0.12, 0.12, 0.14);
    /// Default widget border
    pub const BORDER: Color = Color::rgb(0.35, 0.35, 0.38);
    /// Focus/selection accent
    pub const ACCENT: Color = Color::rgb(0.35, 0.55, 0.95);
    /// Primary text
    pub const TEXT_PRIMARY: Color = Color::rgb(0.9, 0.9, 0.92);
    /// Secondary/disabled text
    pub const TEXT_SECONDARY: Color = Color::rgb(0.55, 0.55, 0.6);
    /// Button background
    pub const BUTTON_BG: Color = Color::rgb(0.2, 0.2, 0.24);
    /// Button background while hovered
    pub const BUTTON_HOVER: Color = Color::rgb(0.28, 0.28, 0.32);
    /// Button background while pressed
    pub const BUTTON_ACTIVE: Color = Color::rgb(0.14, 0.14, 0.18);
    /// Text field background
    pub const FIELD_BG: Color = Color::rgb(0.15, 0.15, 0.17);
    /// Text field background while focused
    pub const FIELD_BG_FOCUSED: Color = Color::rgb(0.18, 0.18, 0.2);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Lighten by moving each channel towards 1.0.
    pub fn lighten(&self, amount: f32) -> Color {
        Color {
            r: (self.r + amount).min(1.0),
            g: (self.g + amount).min(1.0),
            b: (self.b + amount).min(1.0),
            a: self.a,
        }
    }

    /// Darken by moving each channel towards 0.0.
    pub fn darken(&self, amount: f32) -> Color {
        Color {
            r: (self.r - amount).max(0.0),
            g: (self.g - amount).max(0.0),
            b: (self.b - amount).max(0.0),
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut r = Renderer::new(100, 50);
        r.fill_rect(Bounds::new(0.0, 0.0, 10.0, 10.0), Color::BUTTON_BG);
        r.text("7", 2.0, 2.0, 14.0, Color::TEXT_PRIMARY);
        assert_eq!(r.commands().len(), 2);
        assert!(matches!(r.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(r.commands()[1], DrawCommand::Text { .. }));
        r.clear();
        assert!(r.commands().is_empty());
    }

    #[test]
    fn lighten_darken_clamp() {
        let c = Color::rgb(0.95, 0.5, 0.02);
        let l = c.lighten(0.1);
        assert_eq!(l.r, 1.0);
        let d = c.darken(0.1);
        assert_eq!(d.b, 0.0);
    }
}
