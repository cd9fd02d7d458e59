//! Widget trait and related types

use web_time::Instant;

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// The result of handling an event.
#[derive(Debug)]
pub enum EventResult<M> {
    /// Nothing happened.
    None,
    /// Visual state changed; a redraw is needed but no message is produced.
    Redraw,
    /// A message for the application.
    Message(M),
    /// A message for the application plus a redraw request.
    RedrawWithMessage(M),
}

impl<M> EventResult<M> {
    /// Extract the message, if any.
    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Message(msg) | EventResult::RedrawWithMessage(msg) => Some(msg),
            _ => None,
        }
    }

    /// Whether this result requests a redraw.
    pub fn needs_redraw(&self) -> bool {
        matches!(
            self,
            EventResult::Redraw | EventResult::RedrawWithMessage(_)
        )
    }
}

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }

    /// The instant at which this widget wants an [`Event::Tick`], if any.
    ///
    /// The runner collects deadlines after every dispatched event and parks
    /// the event loop until the earliest one.
    fn next_tick(&self) -> Option<Instant> {
        None
    }
}
