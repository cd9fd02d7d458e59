//! Built-in widgets

mod arrow;
mod column;
mod spinner;
mod text;

pub use column::{column, Column};
pub use spinner::{spinner, Spinner};
pub use text::{text, Text};

// Re-export Element since it's commonly used with widgets
pub use crate::Element;
