//! Geometry types used by layout and event handling

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle in window coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether a point lies inside these bounds.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Shrink by a padding on all sides.
    pub fn shrink(&self, padding: Padding) -> Bounds {
        Bounds::new(
            self.x + padding.left,
            self.y + padding.top,
            (self.width - padding.horizontal()).max(0.0),
            (self.height - padding.vertical()).max(0.0),
        )
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Padding around a widget's content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<f32> for Padding {
    fn from(value: f32) -> Self {
        Padding::all(value)
    }
}

/// Defines how a widget's dimension should be sized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Fill all available space
    Fill,
    /// Shrink to fit content
    #[default]
    Shrink,
    /// Fixed size in pixels
    Fixed(f32),
}

impl Length {
    /// Resolve the length to a concrete size given the available space and
    /// the widget's intrinsic size.
    pub fn resolve(&self, available: f32, intrinsic: f32) -> f32 {
        match self {
            Length::Fill => available,
            Length::Shrink => intrinsic,
            Length::Fixed(px) => *px,
        }
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Length::Fixed(value)
    }
}

/// Alignment of content within available space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Offset of `content` within `available` for this alignment.
    pub fn align(&self, available: f32, content: f32) -> f32 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => ((available - content) / 2.0).max(0.0),
            Alignment::End => (available - content).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_contains_edges() {
        let b = Bounds::new(10.0, 10.0, 20.0, 10.0);
        assert!(b.contains(10.0, 10.0));
        assert!(b.contains(30.0, 20.0));
        assert!(!b.contains(9.9, 10.0));
        assert!(!b.contains(30.1, 10.0));
    }

    #[test]
    fn shrink_never_goes_negative() {
        let b = Bounds::new(0.0, 0.0, 4.0, 4.0).shrink(Padding::all(10.0));
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 0.0);
    }

    #[test]
    fn length_resolution() {
        assert_eq!(Length::Fill.resolve(100.0, 20.0), 100.0);
        assert_eq!(Length::Shrink.resolve(100.0, 20.0), 20.0);
        assert_eq!(Length::Fixed(42.0).resolve(100.0, 20.0), 42.0);
    }

    #[test]
    fn alignment_offsets() {
        assert_eq!(Alignment::Start.align(100.0, 40.0), 0.0);
        assert_eq!(Alignment::Center.align(100.0, 40.0), 30.0);
        assert_eq!(Alignment::End.align(100.0, 40.0), 60.0);
    }
}
