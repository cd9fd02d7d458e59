//! Events delivered to widgets by the application runner

use web_time::Instant;

/// Events that widgets can respond to.
#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse moved.
    MouseMove { position: (f32, f32) },
    /// Mouse button pressed.
    MousePress {
        button: MouseButton,
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Mouse button released.
    MouseRelease {
        button: MouseButton,
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Mouse wheel scrolled.
    MouseScroll {
        delta: (f32, f32),
        position: (f32, f32),
    },
    /// Keyboard key pressed.
    KeyPress {
        key: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Committed text input (printable characters).
    TextInput { text: String },
    /// Cursor left the window.
    CursorLeft,
    /// The window lost keyboard focus.
    FocusLost,
    /// Timer wakeup requested via [`crate::Widget::next_tick`].
    Tick { now: Instant },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys the widgets care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// The letter A, for Ctrl+A select-all.
    A,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}
