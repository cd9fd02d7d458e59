//! Centralized constants for spinbox_ui
//!
//! All magic numbers shared by more than one module live here so layout and
//! drawing stay consistent.

use crate::layout::Padding;

// =============================================================================
// Typography
// =============================================================================

/// Default font size used across widgets
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Approximate character width as a ratio of font size.
/// Used for text measurement; glyph rendering uses real metrics.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

// =============================================================================
// Layout & Spacing
// =============================================================================

/// Default spacing between children in a Column
pub const DEFAULT_SPACING: f32 = 8.0;

/// Default padding for the spinner's text field
pub const FIELD_PADDING: Padding = Padding {
    top: 6.0,
    right: 8.0,
    bottom: 6.0,
    left: 8.0,
};

/// Width of the text cursor
pub const CURSOR_WIDTH: f32 = 1.0;

// =============================================================================
// Spinner
// =============================================================================

/// Width of the arrow-button column at the right edge of the spinner
pub const ARROW_COLUMN_WIDTH: f32 = 16.0;

/// Gap between the label and the text field (the divider offset includes it)
pub const LABEL_GAP: f32 = 5.0;

/// Default spinner width when no width is set and the content is small
pub const SPINNER_MIN_FIELD_WIDTH: f32 = 60.0;

// =============================================================================
// Helper Functions
// =============================================================================

/// Calculate approximate character width for a given font size
#[inline]
pub fn char_width(font_size: f32) -> f32 {
    font_size * CHAR_WIDTH_FACTOR
}

/// Calculate approximate line height for a given font size
#[inline]
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

/// Approximate width of a string at a given font size
#[inline]
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * char_width(font_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_width() {
        assert!((char_width(14.0) - 8.4).abs() < 0.001);
        assert!((char_width(12.0) - 7.2).abs() < 0.001);
    }

    #[test]
    fn test_line_height() {
        assert!((line_height(14.0) - 16.8).abs() < 0.001);
    }

    #[test]
    fn test_text_width_counts_chars() {
        assert_eq!(text_width("", 14.0), 0.0);
        assert!((text_width("-500", 14.0) - 4.0 * char_width(14.0)).abs() < 0.001);
    }

    #[test]
    fn test_constants_are_positive() {
        assert!(DEFAULT_FONT_SIZE > 0.0);
        assert!(CHAR_WIDTH_FACTOR > 0.0);
        assert!(DEFAULT_SPACING > 0.0);
        assert!(CURSOR_WIDTH > 0.0);
        assert!(ARROW_COLUMN_WIDTH > 0.0);
    }
}
