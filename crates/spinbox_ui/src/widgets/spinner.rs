//! Integer spinner widget
//!
//! A labelled text field with an up/down arrow pair at its right edge. The
//! value lives in a [`SpinnerState`] owned by the application; the widget
//! works on a copy and reports every mutation back through its callbacks so
//! the owned state never goes stale:
//!
//! - `on_change(value, state)` fires when the value actually changed;
//! - `on_state(state)` fires when only interaction state changed (focus,
//!   cursor, an in-progress edit, a cancelled repeat);
//! - `on_tab(value, state)` fires instead of `on_change` when Tab commits,
//!   so the application can move focus along.
//!
//! Pressing and holding an arrow steps once immediately, then auto-repeats
//! after [`crate::REPEAT_INITIAL_DELAY`] at [`crate::REPEAT_INTERVAL`],
//! driven by [`Event::Tick`] wakeups the runner schedules from
//! [`Widget::next_tick`].

use web_time::Instant;

use crate::constants::{
    char_width, line_height, text_width, ARROW_COLUMN_WIDTH, CURSOR_WIDTH, DEFAULT_FONT_SIZE,
    FIELD_PADDING, LABEL_GAP, SPINNER_MIN_FIELD_WIDTH,
};
use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};
use crate::layout::{Bounds, Length, Size};
use crate::renderer::{Color, Renderer};
use crate::state::{RepeatSession, SpinnerState, StepDirection};
use crate::widget::{EventResult, Widget};

use super::arrow::{self, ArrowVisual};

type ValueCallback<M> = Box<dyn Fn(i32, SpinnerState) -> M>;
type StateCallback<M> = Box<dyn Fn(SpinnerState) -> M>;

/// The spinner widget. Built with [`spinner`].
pub struct Spinner<M> {
    label: String,
    state: SpinnerState,
    font_size: f32,
    width: Length,
    divider: Option<f32>,
    enabled: bool,
    /// Which arrow the pointer is over; purely visual.
    hovered_arrow: Option<StepDirection>,
    on_change: Option<ValueCallback<M>>,
    on_state: Option<StateCallback<M>>,
    on_tab: Option<ValueCallback<M>>,
}

impl<M> Spinner<M> {
    /// Create a spinner working on a copy of the given state.
    pub fn new(state: &SpinnerState) -> Self {
        Self {
            label: String::new(),
            state: state.clone(),
            font_size: DEFAULT_FONT_SIZE,
            width: Length::Shrink,
            divider: None,
            enabled: true,
            hovered_arrow: None,
            on_change: None,
            on_state: None,
            on_tab: None,
        }
    }

    /// Set the label drawn left of the text field
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set both range bounds, clamping the value if needed
    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.state.set_range(min, max);
        self
    }

    /// Set the lower bound
    pub fn min(mut self, min: i32) -> Self {
        self.state.set_min(min);
        self
    }

    /// Set the upper bound
    pub fn max(mut self, max: i32) -> Self {
        self.state.set_max(max);
        self
    }

    /// Set the step size (floored to 1)
    pub fn step(mut self, step: i32) -> Self {
        self.state.set_step(step);
        self
    }

    /// Set the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Override the divider position (where the text field starts).
    /// Defaults to the label width plus a small gap.
    pub fn divider(mut self, divider: f32) -> Self {
        self.divider = Some(divider);
        self
    }

    /// Set the font size
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Enable or disable the whole control
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Message to produce when the value changed
    pub fn on_change(mut self, f: impl Fn(i32, SpinnerState) -> M + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Message to produce when only interaction state changed
    pub fn on_state(mut self, f: impl Fn(SpinnerState) -> M + 'static) -> Self {
        self.on_state = Some(Box::new(f));
        self
    }

    /// Message to produce when Tab commits the field (focus navigation)
    pub fn on_tab(mut self, f: impl Fn(i32, SpinnerState) -> M + 'static) -> Self {
        self.on_tab = Some(Box::new(f));
        self
    }

    // --- Geometry ------------------------------------------------------

    fn divider_position(&self) -> f32 {
        self.divider.unwrap_or_else(|| {
            if self.label.is_empty() {
                0.0
            } else {
                text_width(&self.label, self.font_size) + LABEL_GAP
            }
        })
    }

    fn field_bounds(&self, bounds: Bounds) -> Bounds {
        let x = bounds.x + self.divider_position();
        let width = (bounds.width - self.divider_position() - ARROW_COLUMN_WIDTH).max(0.0);
        Bounds::new(x, bounds.y, width, bounds.height)
    }

    fn arrow_bounds(&self, bounds: Bounds, direction: StepDirection) -> Bounds {
        let x = bounds.x + bounds.width - ARROW_COLUMN_WIDTH;
        let half = bounds.height / 2.0;
        match direction {
            StepDirection::Up => Bounds::new(x, bounds.y, ARROW_COLUMN_WIDTH, half),
            StepDirection::Down => {
                Bounds::new(x, bounds.y + half, ARROW_COLUMN_WIDTH, bounds.height - half)
            }
        }
    }

    fn arrow_at(&self, bounds: Bounds, x: f32, y: f32) -> Option<StepDirection> {
        if self.arrow_bounds(bounds, StepDirection::Up).contains(x, y) {
            Some(StepDirection::Up)
        } else if self.arrow_bounds(bounds, StepDirection::Down).contains(x, y) {
            Some(StepDirection::Down)
        } else {
            None
        }
    }

    /// Character index closest to a click position within the field.
    fn x_to_char_index(&self, x: f32, field: Bounds) -> usize {
        let text_x = field.x + FIELD_PADDING.left;
        let offset = ((x - text_x) / char_width(self.font_size)).round();
        (offset.max(0.0) as usize).min(self.state.text.chars().count())
    }

    /// Selection as an ordered (start, end) range. The stored pair is
    /// (anchor, head), which may be reversed.
    fn selection_range(&self) -> Option<(usize, usize)> {
        self.state
            .selection
            .map(|(a, b)| (a.min(b), a.max(b)))
            .filter(|(start, end)| start != end)
    }

    // --- Message emission ----------------------------------------------

    fn changed(&self) -> EventResult<M> {
        log::debug!("spinner value -> {}", self.state.value());
        match &self.on_change {
            Some(f) => EventResult::RedrawWithMessage(f(self.state.value(), self.state.clone())),
            None => EventResult::Redraw,
        }
    }

    fn state_sync(&self) -> EventResult<M> {
        match &self.on_state {
            Some(f) => EventResult::RedrawWithMessage(f(self.state.clone())),
            None => EventResult::Redraw,
        }
    }

    fn notify(&self, value_changed: bool) -> EventResult<M> {
        if value_changed {
            self.changed()
        } else {
            self.state_sync()
        }
    }

    // --- Interaction ---------------------------------------------------

    fn press_arrow(&mut self, direction: StepDirection) -> EventResult<M> {
        // A pending edit participates in the step.
        let mut changed = false;
        if self.state.is_focused {
            changed |= self.state.commit_text();
            self.state.blur();
        }
        changed |= self.state.step_once(direction);
        self.state.repeat = Some(RepeatSession::new(direction, Instant::now()));
        self.notify(changed)
    }

    fn end_repeat(&mut self) -> EventResult<M> {
        if self.state.repeat.take().is_some() {
            self.state_sync()
        } else {
            EventResult::None
        }
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection_range() else {
            self.state.selection = None;
            return false;
        };
        let chars: Vec<char> = self.state.text.chars().collect();
        self.state.text = chars[..start].iter().chain(chars[end..].iter()).collect();
        self.state.cursor = start;
        self.state.selection = None;
        true
    }

    /// Insert one character at the cursor if the buffer stays a plausible
    /// integer: digits anywhere, a minus sign only at the front.
    fn insert_char(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() && ch != '-' {
            return false;
        }
        let had_selection = self.selection_range().is_some();
        if had_selection {
            self.delete_selection();
        }
        if ch == '-' && (self.state.cursor != 0 || self.state.text.starts_with('-')) {
            return had_selection;
        }
        let byte_index = self
            .state
            .text
            .char_indices()
            .nth(self.state.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.state.text.len());
        self.state.text.insert(byte_index, ch);
        self.state.cursor += 1;
        true
    }

    fn move_cursor(&mut self, target: usize, extend: bool) {
        if extend {
            let anchor = self.state.selection.map(|(a, _)| a).unwrap_or(self.state.cursor);
            self.state.selection = Some((anchor, target));
        } else {
            self.state.selection = None;
        }
        self.state.cursor = target;
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> EventResult<M> {
        let len = self.state.text.chars().count();
        match key {
            KeyCode::Up | KeyCode::Down => {
                let direction = if key == KeyCode::Up {
                    StepDirection::Up
                } else {
                    StepDirection::Down
                };
                let mut changed = self.state.commit_text();
                changed |= self.state.step_once(direction);
                self.notify(changed)
            }
            KeyCode::Enter => {
                let changed = self.state.commit_text();
                self.state.focus();
                self.notify(changed)
            }
            KeyCode::Tab => {
                let changed = self.state.commit_text();
                self.state.blur();
                if let Some(f) = &self.on_tab {
                    EventResult::RedrawWithMessage(f(self.state.value(), self.state.clone()))
                } else {
                    self.notify(changed)
                }
            }
            KeyCode::Escape => {
                // Revert the edit, no notification of a value change.
                self.state.sync_text();
                self.state.blur();
                self.state_sync()
            }
            KeyCode::Backspace => {
                if !self.delete_selection() && self.state.cursor > 0 {
                    let idx = self.state.cursor - 1;
                    let chars: Vec<char> = self.state.text.chars().collect();
                    self.state.text = chars[..idx].iter().chain(chars[idx + 1..].iter()).collect();
                    self.state.cursor = idx;
                }
                self.state_sync()
            }
            KeyCode::Delete => {
                if !self.delete_selection() && self.state.cursor < len {
                    let idx = self.state.cursor;
                    let chars: Vec<char> = self.state.text.chars().collect();
                    self.state.text = chars[..idx].iter().chain(chars[idx + 1..].iter()).collect();
                }
                self.state_sync()
            }
            KeyCode::Left => {
                let target = if !modifiers.shift && self.selection_range().is_some() {
                    self.selection_range().map(|(s, _)| s).unwrap_or(0)
                } else {
                    self.state.cursor.saturating_sub(1)
                };
                self.move_cursor(target, modifiers.shift);
                self.state_sync()
            }
            KeyCode::Right => {
                let target = if !modifiers.shift && self.selection_range().is_some() {
                    self.selection_range().map(|(_, e)| e).unwrap_or(len)
                } else {
                    (self.state.cursor + 1).min(len)
                };
                self.move_cursor(target, modifiers.shift);
                self.state_sync()
            }
            KeyCode::Home => {
                self.move_cursor(0, modifiers.shift);
                self.state_sync()
            }
            KeyCode::End => {
                self.move_cursor(len, modifiers.shift);
                self.state_sync()
            }
            KeyCode::A if modifiers.ctrl => {
                if len > 0 {
                    self.state.selection = Some((0, len));
                    self.state.cursor = len;
                }
                self.state_sync()
            }
            KeyCode::A => EventResult::None,
        }
    }
}

impl<M: 'static> Widget<M> for Spinner<M> {
    fn layout(&mut self, available: Size) -> Size {
        let field_width = (text_width(&self.state.text, self.font_size)
            + FIELD_PADDING.horizontal())
        .max(SPINNER_MIN_FIELD_WIDTH);
        let intrinsic = self.divider_position() + field_width + ARROW_COLUMN_WIDTH;
        let height = line_height(self.font_size) + FIELD_PADDING.vertical();
        Size::new(
            self.width.resolve(available.width, intrinsic).min(available.width),
            height,
        )
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let field = self.field_bounds(bounds);
        let text_color = if self.enabled {
            Color::TEXT_PRIMARY
        } else {
            Color::TEXT_SECONDARY
        };

        // Label, vertically centered against the field
        if !self.label.is_empty() {
            let label_y = bounds.center_y() - line_height(self.font_size) / 2.0;
            renderer.text(&self.label, bounds.x, label_y, self.font_size, text_color);
        }

        // Field background and border
        let (bg, border) = if self.state.is_focused {
            (Color::FIELD_BG_FOCUSED, Color::ACCENT)
        } else {
            (Color::FIELD_BG, Color::BORDER)
        };
        renderer.fill_rect(field, bg);
        renderer.stroke_rect(field, border, 1.0);

        let text_x = field.x + FIELD_PADDING.left;
        let text_y = field.center_y() - line_height(self.font_size) / 2.0;
        let cw = char_width(self.font_size);

        // Selection behind the text
        if let Some((start, end)) = self.selection_range() {
            let sel = Bounds::new(
                text_x + start as f32 * cw,
                text_y,
                (end - start) as f32 * cw,
                line_height(self.font_size),
            );
            renderer.fill_rect(sel, Color::rgba(0.35, 0.55, 0.95, 0.35));
        }

        renderer.text(&self.state.text, text_x, text_y, self.font_size, text_color);

        // Cursor
        if self.state.is_focused && self.selection_range().is_none() {
            let cursor_x = text_x + self.state.cursor as f32 * cw;
            renderer.fill_rect(
                Bounds::new(cursor_x, text_y, CURSOR_WIDTH, line_height(self.font_size)),
                Color::TEXT_PRIMARY,
            );
        }

        // Arrow pair
        for direction in [StepDirection::Up, StepDirection::Down] {
            let visual = if !self.enabled {
                ArrowVisual::Disabled
            } else if self
                .state
                .repeat
                .as_ref()
                .is_some_and(|s| s.direction() == direction)
            {
                ArrowVisual::Pressed
            } else if self.hovered_arrow == Some(direction) {
                ArrowVisual::Hovered
            } else {
                ArrowVisual::Idle
            };
            arrow::draw(renderer, self.arrow_bounds(bounds, direction), direction, visual);
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        if !self.enabled {
            return EventResult::None;
        }
        match event {
            Event::MouseMove { position } => {
                let hovered = self.arrow_at(bounds, position.0, position.1);
                // A held arrow stops repeating once the pointer leaves it.
                if let Some(session) = self.state.repeat.as_ref() {
                    let held = self.arrow_bounds(bounds, session.direction());
                    if !held.contains(position.0, position.1) {
                        self.hovered_arrow = hovered;
                        return self.end_repeat();
                    }
                }
                if hovered != self.hovered_arrow {
                    self.hovered_arrow = hovered;
                    EventResult::Redraw
                } else {
                    EventResult::None
                }
            }
            Event::MousePress {
                button: MouseButton::Left,
                position,
                ..
            } => {
                if let Some(direction) = self.arrow_at(bounds, position.0, position.1) {
                    self.press_arrow(direction)
                } else if self.field_bounds(bounds).contains(position.0, position.1) {
                    if self.state.is_focused {
                        let index = self.x_to_char_index(position.0, self.field_bounds(bounds));
                        self.move_cursor(index, false);
                    } else {
                        self.state.focus();
                    }
                    self.state_sync()
                } else if self.state.is_focused {
                    // Click elsewhere commits and blurs.
                    let changed = self.state.commit_text();
                    self.state.blur();
                    self.notify(changed)
                } else {
                    EventResult::None
                }
            }
            Event::MouseRelease {
                button: MouseButton::Left,
                ..
            } => self.end_repeat(),
            Event::CursorLeft => {
                self.hovered_arrow = None;
                let result = self.end_repeat();
                match result {
                    EventResult::None => EventResult::Redraw,
                    other => other,
                }
            }
            Event::TextInput { text } if self.state.is_focused => {
                let mut inserted = false;
                for ch in text.chars() {
                    inserted |= self.insert_char(ch);
                }
                if inserted {
                    self.state_sync()
                } else {
                    EventResult::None
                }
            }
            Event::KeyPress { key, modifiers } if self.state.is_focused => {
                self.handle_key(*key, *modifiers)
            }
            Event::Tick { now } => {
                let Some(session) = self.state.repeat.as_ref() else {
                    return EventResult::None;
                };
                let due = session.due_steps(*now);
                if due == 0 {
                    return EventResult::None;
                }
                let direction = session.direction();
                let mut changed = false;
                for _ in 0..due {
                    changed |= self.state.step_once(direction);
                }
                if let Some(session) = self.state.repeat.as_mut() {
                    session.mark_applied(due);
                }
                self.notify(changed)
            }
            Event::FocusLost => {
                let repeat_ended = self.state.repeat.take().is_some();
                if self.state.is_focused {
                    let changed = self.state.commit_text();
                    self.state.blur();
                    self.notify(changed)
                } else if repeat_ended {
                    self.state_sync()
                } else {
                    EventResult::None
                }
            }
            _ => EventResult::None,
        }
    }

    fn next_tick(&self) -> Option<Instant> {
        self.state.repeat.as_ref().map(|s| s.next_deadline())
    }
}

/// Helper function to create a spinner widget
pub fn spinner<M>(state: &SpinnerState) -> Spinner<M> {
    Spinner::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Duration;

    #[derive(Debug)]
    enum Msg {
        Changed(i32, SpinnerState),
        Synced(SpinnerState),
        Tabbed(i32),
    }

    fn fixture(state: &SpinnerState) -> (Spinner<Msg>, Bounds) {
        let mut widget = spinner(state)
            .label("Variable:")
            .on_change(Msg::Changed)
            .on_state(Msg::Synced)
            .on_tab(|v, _| Msg::Tabbed(v));
        let size = widget.layout(Size::new(400.0, 300.0));
        let bounds = Bounds::new(0.0, 0.0, size.width, size.height);
        (widget, bounds)
    }

    fn center(b: Bounds) -> (f32, f32) {
        (b.x + b.width / 2.0, b.y + b.height / 2.0)
    }

    fn press_at(widget: &mut Spinner<Msg>, bounds: Bounds, position: (f32, f32)) -> Option<Msg> {
        widget
            .on_event(
                &Event::MousePress {
                    button: MouseButton::Left,
                    position,
                    modifiers: KeyModifiers::default(),
                },
                bounds,
            )
            .into_message()
    }

    fn key(widget: &mut Spinner<Msg>, bounds: Bounds, key: KeyCode) -> Option<Msg> {
        widget
            .on_event(
                &Event::KeyPress {
                    key,
                    modifiers: KeyModifiers::default(),
                },
                bounds,
            )
            .into_message()
    }

    #[test]
    fn click_up_arrow_steps_and_notifies() {
        let state = SpinnerState::new(10);
        let (mut widget, bounds) = fixture(&state);
        let up = widget.arrow_bounds(bounds, StepDirection::Up);
        let msg = press_at(&mut widget, bounds, center(up));
        match msg {
            Some(Msg::Changed(11, state)) => assert!(state.repeat.is_some()),
            other => panic!("expected Changed(11), got {other:?}"),
        }
    }

    #[test]
    fn click_up_arrow_at_max_is_silent_sync() {
        let state = SpinnerState::new(100);
        let (mut widget, bounds) = fixture(&state);
        let up = widget.arrow_bounds(bounds, StepDirection::Up);
        let msg = press_at(&mut widget, bounds, center(up));
        match msg {
            Some(Msg::Synced(state)) => {
                assert_eq!(state.value(), 100);
                assert!(state.repeat.is_some());
            }
            other => panic!("expected Synced, got {other:?}"),
        }
    }

    #[test]
    fn hold_repeats_on_ticks_and_release_cancels() {
        let state = SpinnerState::new(0);
        let (mut widget, bounds) = fixture(&state);
        let down_center = center(widget.arrow_bounds(bounds, StepDirection::Down));
        let up = widget.arrow_bounds(bounds, StepDirection::Up);
        press_at(&mut widget, bounds, center(up));
        assert!(widget.next_tick().is_some());

        // Before the initial delay nothing is due.
        let msg = widget
            .on_event(&Event::Tick { now: Instant::now() }, bounds)
            .into_message();
        assert!(msg.is_none());

        // 250ms delay plus one 50ms interval: two repeats on top of the
        // immediate step.
        let later = Instant::now() + Duration::from_millis(310);
        let msg = widget.on_event(&Event::Tick { now: later }, bounds).into_message();
        match msg {
            Some(Msg::Changed(3, _)) => {}
            other => panic!("expected Changed(3), got {other:?}"),
        }

        let msg = widget
            .on_event(
                &Event::MouseRelease {
                    button: MouseButton::Left,
                    position: down_center,
                    modifiers: KeyModifiers::default(),
                },
                bounds,
            )
            .into_message();
        match msg {
            Some(Msg::Synced(state)) => assert!(state.repeat.is_none()),
            other => panic!("expected Synced, got {other:?}"),
        }
        assert!(widget.next_tick().is_none());
    }

    #[test]
    fn pointer_leaving_held_arrow_ends_repeat() {
        let state = SpinnerState::new(0);
        let (mut widget, bounds) = fixture(&state);
        let up = widget.arrow_bounds(bounds, StepDirection::Up);
        press_at(&mut widget, bounds, center(up));
        let msg = widget
            .on_event(
                &Event::MouseMove {
                    position: (bounds.x + 1.0, bounds.y + 1.0),
                },
                bounds,
            )
            .into_message();
        match msg {
            Some(Msg::Synced(state)) => assert!(state.repeat.is_none()),
            other => panic!("expected Synced, got {other:?}"),
        }
    }

    #[test]
    fn field_click_focuses_and_selects_all() {
        let state = SpinnerState::new(42);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        let msg = press_at(&mut widget, bounds, center(field));
        match msg {
            Some(Msg::Synced(state)) => {
                assert!(state.is_focused);
                assert_eq!(state.selection, Some((0, 2)));
            }
            other => panic!("expected Synced, got {other:?}"),
        }
    }

    #[test]
    fn typed_value_commits_on_enter() {
        let state = SpinnerState::new(0);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        press_at(&mut widget, bounds, center(field));
        widget.on_event(
            &Event::TextInput {
                text: String::from("77"),
            },
            bounds,
        );
        let msg = key(&mut widget, bounds, KeyCode::Enter);
        match msg {
            Some(Msg::Changed(77, state)) => {
                assert!(state.is_focused, "enter keeps focus");
                assert_eq!(state.text, "77");
            }
            other => panic!("expected Changed(77), got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_entry_clamps_then_rejects() {
        let state = SpinnerState::new(10);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        press_at(&mut widget, bounds, center(field));
        widget.on_event(
            &Event::TextInput {
                text: String::from("500"),
            },
            bounds,
        );
        match key(&mut widget, bounds, KeyCode::Enter) {
            Some(Msg::Changed(100, _)) => {}
            other => panic!("expected clamp to 100, got {other:?}"),
        }

        // Same out-of-range entry again: already saturated, silent revert.
        widget.on_event(
            &Event::TextInput {
                text: String::from("500"),
            },
            bounds,
        );
        match key(&mut widget, bounds, KeyCode::Enter) {
            Some(Msg::Synced(state)) => assert_eq!(state.text, "100"),
            other => panic!("expected Synced, got {other:?}"),
        }
    }

    #[test]
    fn tab_commits_and_reports_focus_navigation() {
        let state = SpinnerState::new(0);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        press_at(&mut widget, bounds, center(field));
        widget.on_event(
            &Event::TextInput {
                text: String::from("5"),
            },
            bounds,
        );
        match key(&mut widget, bounds, KeyCode::Tab) {
            Some(Msg::Tabbed(5)) => {}
            other => panic!("expected Tabbed(5), got {other:?}"),
        }
    }

    #[test]
    fn arrow_keys_step_the_focused_field() {
        let state = SpinnerState::new(10);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        press_at(&mut widget, bounds, center(field));
        match key(&mut widget, bounds, KeyCode::Up) {
            Some(Msg::Changed(11, _)) => {}
            other => panic!("expected Changed(11), got {other:?}"),
        }
        match key(&mut widget, bounds, KeyCode::Down) {
            Some(Msg::Changed(10, _)) => {}
            other => panic!("expected Changed(10), got {other:?}"),
        }
    }

    #[test]
    fn escape_reverts_without_notifying_change() {
        let state = SpinnerState::new(10);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        press_at(&mut widget, bounds, center(field));
        widget.on_event(
            &Event::TextInput {
                text: String::from("99"),
            },
            bounds,
        );
        match key(&mut widget, bounds, KeyCode::Escape) {
            Some(Msg::Synced(state)) => {
                assert_eq!(state.value(), 10);
                assert_eq!(state.text, "10");
                assert!(!state.is_focused);
            }
            other => panic!("expected Synced, got {other:?}"),
        }
    }

    #[test]
    fn minus_sign_only_at_front() {
        let mut state = SpinnerState::new(0);
        state.set_range(-100, 100);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        press_at(&mut widget, bounds, center(field));
        // Select-all replacement: "-5" is accepted.
        widget.on_event(
            &Event::TextInput {
                text: String::from("-5"),
            },
            bounds,
        );
        assert_eq!(widget.state.text, "-5");
        // A second minus at the end is rejected.
        widget.on_event(
            &Event::TextInput {
                text: String::from("-"),
            },
            bounds,
        );
        assert_eq!(widget.state.text, "-5");
        // Letters never land in the buffer.
        widget.on_event(
            &Event::TextInput {
                text: String::from("x"),
            },
            bounds,
        );
        assert_eq!(widget.state.text, "-5");
    }

    #[test]
    fn outside_click_commits_and_blurs() {
        let mut state = SpinnerState::new(0);
        state.set_range(-500, 500);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        press_at(&mut widget, bounds, center(field));
        widget.on_event(
            &Event::TextInput {
                text: String::from("250"),
            },
            bounds,
        );
        let msg = press_at(&mut widget, bounds, (bounds.width + 50.0, bounds.height + 50.0));
        match msg {
            Some(Msg::Changed(250, state)) => assert!(!state.is_focused),
            other => panic!("expected Changed(250), got {other:?}"),
        }
    }

    #[test]
    fn disabled_spinner_ignores_events() {
        let state = SpinnerState::new(0);
        let mut widget: Spinner<Msg> = spinner(&state)
            .enabled(false)
            .on_change(Msg::Changed);
        let size = widget.layout(Size::new(400.0, 300.0));
        let bounds = Bounds::new(0.0, 0.0, size.width, size.height);
        let up = widget.arrow_bounds(bounds, StepDirection::Up);
        let result = widget.on_event(
            &Event::MousePress {
                button: MouseButton::Left,
                position: center(up),
                modifiers: KeyModifiers::default(),
            },
            bounds,
        );
        assert!(result.into_message().is_none());
    }

    #[test]
    fn backspace_and_editing_keys() {
        let state = SpinnerState::new(42);
        let (mut widget, bounds) = fixture(&state);
        let field = widget.field_bounds(bounds);
        press_at(&mut widget, bounds, center(field));
        // Collapse the select-all, then erase the last digit.
        key(&mut widget, bounds, KeyCode::End);
        key(&mut widget, bounds, KeyCode::Backspace);
        assert_eq!(widget.state.text, "4");
        key(&mut widget, bounds, KeyCode::Home);
        key(&mut widget, bounds, KeyCode::Delete);
        assert_eq!(widget.state.text, "");
        // Committing an empty buffer parses as zero.
        match key(&mut widget, bounds, KeyCode::Enter) {
            Some(Msg::Changed(0, _)) => {}
            other => panic!("expected Changed(0), got {other:?}"),
        }
    }
}
