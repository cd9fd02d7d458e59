//! Application trait and event-loop runner
//!
//! The runner owns a single window with a software-rendered surface. Frames
//! are recorded as draw commands, rasterized on the CPU and presented with
//! softbuffer. The view tree is retained between events and rebuilt whenever
//! the application handles a message, so widget-internal visual state (hover)
//! survives pure redraws.
//!
//! Widgets that need timed wakeups report a deadline through
//! [`crate::Widget::next_tick`]; the runner parks the loop with
//! `ControlFlow::WaitUntil` and dispatches [`Event::Tick`] when it fires.

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{
    ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, StartCause, WindowEvent,
};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, OwnedDisplayHandle};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use web_time::Instant;

use crate::element::Element;
use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};
use crate::layout::{Bounds, Size};
use crate::raster::Rasterizer;
use crate::renderer::{Color, Renderer};

/// Core application trait that defines the lifecycle of a spinbox_ui
/// application.
///
/// Applications maintain state, respond to messages, and produce a view.
pub trait Application: Sized {
    /// The message type that this application handles.
    type Message: 'static;

    /// Initialize the application state.
    fn new() -> Self;

    /// Return the window title for the application.
    fn title(&self) -> String;

    /// Update the application state in response to a message.
    fn update(&mut self, message: Self::Message);

    /// Produce the view tree for the current application state.
    fn view(&self) -> Element<Self::Message>;
}

/// Settings for running an application.
pub struct Settings {
    /// Window title; defaults to [`Application::title`]
    pub window_title: Option<String>,

    /// Initial window size in logical pixels
    pub window_size: (u32, u32),

    /// Minimum window size, if any
    pub min_window_size: Option<(u32, u32)>,

    /// Whether the window should be resizable
    pub resizable: bool,

    /// Log level for env_logger (overridable via RUST_LOG)
    pub log_level: log::LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (800, 600),
            min_window_size: None,
            resizable: true,
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Errors that can abort the runner.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("software surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

/// Run an application with default settings.
pub fn run<A: Application + 'static>() -> Result<(), Error> {
    run_with_settings::<A>(Settings::default())
}

/// Run an application with the given settings. Returns when the window is
/// closed.
pub fn run_with_settings<A: Application + 'static>(settings: Settings) -> Result<(), Error> {
    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .parse_default_env()
        .try_init()
        .ok();

    let event_loop = EventLoop::new()?;
    let mut runner = Runner {
        app: A::new(),
        settings,
        window: None,
        surface: None,
        _context: None,
        rasterizer: Rasterizer::new(),
        view: None,
        cursor: (0.0, 0.0),
        modifiers: KeyModifiers::default(),
        failure: None,
    };
    event_loop.run_app(&mut runner)?;
    match runner.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct Runner<A: Application> {
    app: A,
    settings: Settings,
    window: Option<Arc<Window>>,
    // Declared before the context so the surface drops first.
    surface: Option<Surface<OwnedDisplayHandle, Arc<Window>>>,
    _context: Option<Context<OwnedDisplayHandle>>,
    rasterizer: Rasterizer,
    /// Retained view tree; dropped after every handled message.
    view: Option<Element<A::Message>>,
    cursor: (f32, f32),
    modifiers: KeyModifiers,
    failure: Option<Error>,
}

impl<A: Application> Runner<A> {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Error> {
        let title = self
            .settings
            .window_title
            .clone()
            .unwrap_or_else(|| self.app.title());
        let mut attrs = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(
                self.settings.window_size.0,
                self.settings.window_size.1,
            ))
            .with_resizable(self.settings.resizable);
        if let Some((w, h)) = self.settings.min_window_size {
            attrs = attrs.with_min_inner_size(LogicalSize::new(w, h));
        }

        let window = Arc::new(event_loop.create_window(attrs)?);
        let context = Context::new(event_loop.owned_display_handle())?;
        let surface = Surface::new(&context, window.clone())?;
        self.window = Some(window);
        self.surface = Some(surface);
        self._context = Some(context);
        Ok(())
    }

    fn window_bounds(&self) -> Option<Bounds> {
        let window = self.window.as_ref()?;
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return None;
        }
        Some(Bounds::new(0.0, 0.0, size.width as f32, size.height as f32))
    }

    /// Build (if needed) and lay out the view for the current window size.
    fn ensure_view(&mut self, bounds: Bounds) -> &mut Element<A::Message> {
        let view = self.view.get_or_insert_with(|| self.app.view());
        view.layout(Size::new(bounds.width, bounds.height));
        view
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: Event) {
        let Some(bounds) = self.window_bounds() else {
            return;
        };
        let result = self.ensure_view(bounds).on_event(&event, bounds);
        let needs_redraw = result.needs_redraw();
        if let Some(message) = result.into_message() {
            self.app.update(message);
            // State changed; the next frame starts from a fresh view.
            self.view = None;
        }
        if let (true, Some(window)) = (needs_redraw, self.window.as_ref()) {
            window.request_redraw();
        }
        self.schedule(event_loop, bounds);
    }

    /// Park the loop until the earliest widget deadline, or indefinitely.
    fn schedule(&mut self, event_loop: &ActiveEventLoop, bounds: Bounds) {
        match self.ensure_view(bounds).next_tick() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn redraw(&mut self) {
        let Some(bounds) = self.window_bounds() else {
            return;
        };
        let width = bounds.width as u32;
        let height = bounds.height as u32;

        let mut renderer = Renderer::new(width, height);
        self.ensure_view(bounds).draw(&mut renderer, bounds);
        let pixels = self
            .rasterizer
            .render(renderer.commands(), width, height, Color::PANEL_BG);

        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        if let Err(err) = surface.resize(w, h) {
            log::warn!("surface resize failed: {err}");
            return;
        }
        match surface.buffer_mut() {
            Ok(mut buffer) => {
                buffer.copy_from_slice(&pixels);
                if let Err(err) = buffer.present() {
                    log::warn!("present failed: {err}");
                }
            }
            Err(err) => log::warn!("surface buffer unavailable: {err}"),
        }
    }
}

impl<A: Application> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init(event_loop) {
                log::error!("initialization failed: {err}");
                self.failure = Some(err);
                event_loop.exit();
            }
        }
    }

    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            self.dispatch(
                event_loop,
                Event::Tick {
                    now: Instant::now(),
                },
            );
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                self.dispatch(
                    event_loop,
                    Event::MouseMove {
                        position: self.cursor,
                    },
                );
            }
            WindowEvent::CursorLeft { .. } => self.dispatch(event_loop, Event::CursorLeft),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_mouse_button(button);
                let event = match state {
                    ElementState::Pressed => Event::MousePress {
                        button,
                        position: self.cursor,
                        modifiers: self.modifiers,
                    },
                    ElementState::Released => Event::MouseRelease {
                        button,
                        position: self.cursor,
                        modifiers: self.modifiers,
                    },
                };
                self.dispatch(event_loop, event);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x, y),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };
                self.dispatch(
                    event_loop,
                    Event::MouseScroll {
                        delta,
                        position: self.cursor,
                    },
                );
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                self.modifiers = KeyModifiers {
                    shift: state.shift_key(),
                    ctrl: state.control_key(),
                    alt: state.alt_key(),
                    meta: state.super_key(),
                };
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let Some(key) = map_key(&event.logical_key, self.modifiers) {
                    self.dispatch(
                        event_loop,
                        Event::KeyPress {
                            key,
                            modifiers: self.modifiers,
                        },
                    );
                } else if let Some(text) = event.text.as_ref() {
                    // Printable input only; shortcuts never reach the buffer.
                    if !self.modifiers.ctrl
                        && !self.modifiers.alt
                        && text.chars().all(|c| !c.is_control())
                    {
                        self.dispatch(
                            event_loop,
                            Event::TextInput {
                                text: text.to_string(),
                            },
                        );
                    }
                }
            }
            WindowEvent::Focused(false) => self.dispatch(event_loop, Event::FocusLost),
            _ => {}
        }
    }
}

fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(0),
        WinitMouseButton::Forward => MouseButton::Other(1),
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

fn map_key(key: &Key, modifiers: KeyModifiers) -> Option<KeyCode> {
    match key {
        Key::Named(named) => match named {
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Backspace => Some(KeyCode::Backspace),
            NamedKey::Delete => Some(KeyCode::Delete),
            NamedKey::Tab => Some(KeyCode::Tab),
            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),
            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            _ => None,
        },
        Key::Character(s) if modifiers.ctrl && s.eq_ignore_ascii_case("a") => Some(KeyCode::A),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let s = Settings::default();
        assert_eq!(s.window_size, (800, 600));
        assert!(s.resizable);
        assert!(s.window_title.is_none());
    }

    #[test]
    fn named_keys_map() {
        let mods = KeyModifiers::default();
        assert_eq!(
            map_key(&Key::Named(NamedKey::Enter), mods),
            Some(KeyCode::Enter)
        );
        assert_eq!(
            map_key(&Key::Named(NamedKey::ArrowUp), mods),
            Some(KeyCode::Up)
        );
        assert_eq!(map_key(&Key::Named(NamedKey::F1), mods), None);
    }

    #[test]
    fn ctrl_a_maps_only_with_ctrl() {
        let plain = KeyModifiers::default();
        let ctrl = KeyModifiers {
            ctrl: true,
            ..KeyModifiers::default()
        };
        let a = Key::Character("a".into());
        assert_eq!(map_key(&a, plain), None);
        assert_eq!(map_key(&a, ctrl), Some(KeyCode::A));
    }
}
