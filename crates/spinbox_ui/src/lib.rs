//! spinbox_ui - a small callback-based widget toolkit built around one
//! control: an integer spinner (text field plus nudge arrows).
//!
//! The crate provides a builder-style widget API over a software-rendered
//! winit window. Applications implement [`Application`], own their widget
//! state, and receive messages when the user changes a value.

mod application;
mod constants;
mod element;
mod event;
mod layout;
mod raster;
mod renderer;
mod state;
mod widget;
mod widgets;

pub use application::{run, run_with_settings, Application, Error, Settings};
pub use constants::{char_width, line_height};
pub use element::Element;
pub use event::{Event, KeyCode, KeyModifiers, MouseButton};
pub use layout::{Alignment, Bounds, Length, Padding, Size};
pub use renderer::{Color, DrawCommand, Renderer};
pub use state::{
    RepeatSession, SpinnerConfig, SpinnerState, StepDirection, REPEAT_INITIAL_DELAY,
    REPEAT_INTERVAL,
};
pub use widget::{EventResult, Widget};

// Re-export widgets
pub use widgets::{column, spinner, text, Column, Spinner, Text};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, Settings};
    pub use crate::element::Element;
    pub use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};
    pub use crate::layout::{Alignment, Bounds, Length, Padding, Size};
    pub use crate::renderer::Color;
    pub use crate::state::{SpinnerConfig, SpinnerState, StepDirection};
    pub use crate::widget::{EventResult, Widget};
    pub use crate::widgets::{column, spinner, text};
}
