//! Text widget

use crate::constants::{line_height, text_width, DEFAULT_FONT_SIZE};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;

/// A text display widget
pub struct Text {
    content: String,
    size: f32,
    color: Color,
    width: Length,
}

impl Text {
    /// Create a new text widget
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            color: Color::TEXT_PRIMARY,
            width: Length::Shrink,
        }
    }

    /// Set the font size
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Approximate text dimensions; glyph rendering uses real metrics.
    fn measure(&self) -> Size {
        Size::new(
            text_width(&self.content, self.size),
            line_height(self.size),
        )
    }
}

impl<M> Widget<M> for Text {
    fn layout(&mut self, available: Size) -> Size {
        let content_size = self.measure();
        Size::new(
            self.width.resolve(available.width, content_size.width),
            content_size.height,
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        renderer.text(&self.content, bounds.x, bounds.y, self.size, self.color);
    }
}

/// Helper function to create a text widget
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    #[test]
    fn shrinks_to_content() {
        let mut t = text("-500");
        let size = Widget::<()>::layout(&mut t, Size::new(800.0, 600.0));
        assert!(size.width < 800.0);
        assert!((size.height - line_height(DEFAULT_FONT_SIZE)).abs() < 0.001);
    }

    #[test]
    fn fixed_width_overrides_content() {
        let mut t = text("hi").width(120.0);
        let size = Widget::<()>::layout(&mut t, Size::new(800.0, 600.0));
        assert_eq!(size.width, 120.0);
    }

    #[test]
    fn draw_emits_text_command() {
        let t = text("Value: 7");
        let mut renderer = Renderer::new(200, 100);
        Widget::<()>::draw(&t, &mut renderer, Bounds::new(5.0, 5.0, 100.0, 20.0));
        assert!(matches!(
            renderer.commands()[0],
            DrawCommand::Text { .. }
        ));
    }
}
