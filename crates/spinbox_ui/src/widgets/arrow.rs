//! Arrow button halves of the spinner
//!
//! Not a standalone widget; the spinner owns the two halves and drives their
//! hit-testing and repeat behavior itself. This module only knows how one
//! half looks.

use crate::layout::Bounds;
use crate::renderer::{Color, Renderer};
use crate::state::StepDirection;

/// Visual state of one arrow half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ArrowVisual {
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

impl ArrowVisual {
    pub(super) fn background(self) -> Color {
        match self {
            ArrowVisual::Idle => Color::BUTTON_BG,
            ArrowVisual::Hovered => Color::BUTTON_HOVER,
            ArrowVisual::Pressed => Color::BUTTON_ACTIVE,
            ArrowVisual::Disabled => Color::BUTTON_BG.darken(0.04),
        }
    }

    fn glyph(self) -> Color {
        match self {
            ArrowVisual::Disabled => Color::TEXT_SECONDARY,
            ArrowVisual::Pressed => Color::TEXT_PRIMARY.lighten(0.08),
            _ => Color::TEXT_PRIMARY,
        }
    }
}

/// Draw one arrow half into `bounds`.
pub(super) fn draw(
    renderer: &mut Renderer,
    bounds: Bounds,
    direction: StepDirection,
    visual: ArrowVisual,
) {
    renderer.fill_rect(bounds, visual.background());
    renderer.stroke_rect(bounds, Color::BORDER, 1.0);

    // Glyph inset by a third of the half's size so it reads at small sizes.
    let inset_x = bounds.width / 3.0;
    let inset_y = bounds.height / 3.0;
    let left = bounds.x + inset_x;
    let right = bounds.x + bounds.width - inset_x;
    let mid_x = bounds.x + bounds.width / 2.0;
    let top = bounds.y + inset_y;
    let bottom = bounds.y + bounds.height - inset_y;

    let points = match direction {
        StepDirection::Up => [(left, bottom), (right, bottom), (mid_x, top)],
        StepDirection::Down => [(left, top), (right, top), (mid_x, bottom)],
    };
    renderer.triangle(points, visual.glyph());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    #[test]
    fn visual_states_have_distinct_backgrounds() {
        let idle = ArrowVisual::Idle.background();
        assert_ne!(idle, ArrowVisual::Hovered.background());
        assert_ne!(idle, ArrowVisual::Pressed.background());
        assert_ne!(idle, ArrowVisual::Disabled.background());
    }

    #[test]
    fn up_glyph_points_up() {
        let mut renderer = Renderer::new(100, 100);
        let bounds = Bounds::new(0.0, 0.0, 16.0, 12.0);
        draw(&mut renderer, bounds, StepDirection::Up, ArrowVisual::Idle);
        let triangle = renderer
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Triangle { points, .. } => Some(*points),
                _ => None,
            })
            .unwrap();
        // Apex is the third point and sits above the base.
        assert!(triangle[2].1 < triangle[0].1);
        assert!(triangle[2].1 < triangle[1].1);
    }
}
