//! Column layout widget

use web_time::Instant;

use crate::constants::DEFAULT_SPACING;
use crate::element::Element;
use crate::event::Event;
use crate::layout::{Alignment, Bounds, Length, Padding, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

/// A vertical column layout widget
pub struct Column<M> {
    children: Vec<Element<M>>,
    spacing: f32,
    padding: Padding,
    width: Length,
    height: Length,
    align_x: Alignment,
    /// Cached child bounds from layout, relative to the column origin
    child_bounds: Vec<Bounds>,
}

impl<M> Column<M> {
    /// Create a new column with the given children
    pub fn new(children: Vec<Element<M>>) -> Self {
        Self {
            children,
            spacing: DEFAULT_SPACING,
            padding: Padding::ZERO,
            width: Length::Shrink,
            height: Length::Shrink,
            align_x: Alignment::Start,
            child_bounds: Vec::new(),
        }
    }

    /// Set spacing between children
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set padding around the column
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Set the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Set horizontal alignment of children
    pub fn align_x(mut self, align: Alignment) -> Self {
        self.align_x = align;
        self
    }

    fn absolute_child_bounds(&self, index: usize, bounds: Bounds) -> Bounds {
        let relative = self.child_bounds[index];
        Bounds::new(
            bounds.x + relative.x,
            bounds.y + relative.y,
            relative.width,
            relative.height,
        )
    }
}

impl<M: 'static> Widget<M> for Column<M> {
    fn layout(&mut self, available: Size) -> Size {
        let inner_available = Size::new(
            (available.width - self.padding.horizontal()).max(0.0),
            (available.height - self.padding.vertical()).max(0.0),
        );

        // First pass: layout all children
        let mut max_width: f32 = 0.0;
        for child in self.children.iter_mut() {
            let child_size = child.layout(inner_available);
            max_width = max_width.max(child_size.width);
        }

        // Second pass: stack children, aligning each within the widest one
        self.child_bounds.clear();
        let mut y = self.padding.top;
        for child in self.children.iter() {
            let child_size = child.cached_size();
            let x_offset = self.align_x.align(max_width, child_size.width);
            self.child_bounds.push(Bounds::new(
                self.padding.left + x_offset,
                y,
                child_size.width,
                child_size.height,
            ));
            y += child_size.height + self.spacing;
        }

        let content_height = if self.children.is_empty() {
            0.0
        } else {
            y - self.spacing - self.padding.top
        };
        let content_width = max_width + self.padding.horizontal();

        Size::new(
            self.width.resolve(available.width, content_width),
            self.height
                .resolve(available.height, content_height + self.padding.vertical()),
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        for (index, child) in self.children.iter().enumerate() {
            child.draw(renderer, self.absolute_child_bounds(index, bounds));
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        // Every child sees the event (blur-on-outside-click depends on it);
        // the first message wins, redraw requests merge.
        let mut redraw = false;
        let mut message = None;
        for index in 0..self.children.len() {
            let child_bounds = self.absolute_child_bounds(index, bounds);
            let result = self.children[index].on_event(event, child_bounds);
            redraw |= result.needs_redraw();
            if message.is_none() {
                message = result.into_message();
            }
        }
        match (message, redraw) {
            (Some(msg), true) => EventResult::RedrawWithMessage(msg),
            (Some(msg), false) => EventResult::Message(msg),
            (None, true) => EventResult::Redraw,
            (None, false) => EventResult::None,
        }
    }

    fn next_tick(&self) -> Option<Instant> {
        self.children.iter().filter_map(|c| c.next_tick()).min()
    }
}

/// Helper function to create a column widget
pub fn column<M>(children: Vec<Element<M>>) -> Column<M> {
    Column::new(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::text;

    #[test]
    fn stacks_children_with_spacing() {
        let mut col = column::<()>(vec![
            Element::new(text("one")),
            Element::new(text("two")),
        ])
        .spacing(10.0);
        let size = col.layout(Size::new(400.0, 300.0));
        assert_eq!(col.child_bounds.len(), 2);
        assert_eq!(col.child_bounds[0].y, 0.0);
        let expected_y = col.child_bounds[0].height + 10.0;
        assert!((col.child_bounds[1].y - expected_y).abs() < 0.001);
        assert!(size.height > col.child_bounds[1].y);
    }

    #[test]
    fn padding_offsets_children() {
        let mut col = column::<()>(vec![Element::new(text("x"))]).padding(12.0);
        col.layout(Size::new(400.0, 300.0));
        assert_eq!(col.child_bounds[0].x, 12.0);
        assert_eq!(col.child_bounds[0].y, 12.0);
    }

    #[test]
    fn empty_column_is_zero_sized() {
        let mut col = column::<()>(vec![]);
        let size = col.layout(Size::new(400.0, 300.0));
        assert_eq!(size, Size::ZERO);
    }
}
