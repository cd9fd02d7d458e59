//! Spinner value model and interaction state
//!
//! [`SpinnerState`] is owned by the application and handed to the widget each
//! frame, so interaction state survives view rebuilds. The text buffer is
//! derived from the value and resynchronized after every accepted or rejected
//! edit; the value itself never leaves `[min, max]`.

use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

/// Delay between pressing an arrow and the first auto-repeat step.
pub const REPEAT_INITIAL_DELAY: Duration = Duration::from_millis(250);

/// Interval between auto-repeat steps once repeating has started.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Direction of a step action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    /// Signed multiplier for the step size.
    pub fn sign(self) -> i32 {
        match self {
            StepDirection::Up => 1,
            StepDirection::Down => -1,
        }
    }
}

/// An active press-and-hold repeat on one of the arrow buttons.
///
/// Created on pointer-down (after the immediate first step) and destroyed on
/// release or when the pointer leaves the button. Repeats are due at
/// `started + REPEAT_INITIAL_DELAY + k * REPEAT_INTERVAL` for `k = 0, 1, ...`;
/// `applied` tracks how many of them have already been performed so a late
/// tick catches up without double-stepping.
#[derive(Debug, Clone)]
pub struct RepeatSession {
    direction: StepDirection,
    started: Instant,
    applied: u32,
}

impl RepeatSession {
    pub fn new(direction: StepDirection, now: Instant) -> Self {
        Self {
            direction,
            started: now,
            applied: 0,
        }
    }

    pub fn direction(&self) -> StepDirection {
        self.direction
    }

    /// Number of repeat steps that are due but not yet applied at `now`.
    pub fn due_steps(&self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < REPEAT_INITIAL_DELAY {
            return 0;
        }
        let past_delay = elapsed - REPEAT_INITIAL_DELAY;
        let total = 1 + (past_delay.as_millis() / REPEAT_INTERVAL.as_millis()) as u32;
        total.saturating_sub(self.applied)
    }

    /// Record `count` repeats as performed.
    pub fn mark_applied(&mut self, count: u32) {
        self.applied += count;
    }

    /// The instant of the next repeat step.
    pub fn next_deadline(&self) -> Instant {
        self.started + REPEAT_INITIAL_DELAY + REPEAT_INTERVAL * self.applied
    }
}

/// The persisted subset of a spinner's state.
///
/// The current value is deliberately absent: it is reconstructed from the
/// text buffer (or reset) on load, matching the control's archival contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinnerConfig {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            step: 1,
        }
    }
}

/// State of one spinner control: the integer value model plus the derived
/// text buffer and transient interaction state.
#[derive(Debug, Clone)]
pub struct SpinnerState {
    value: i32,
    min: i32,
    max: i32,
    step: i32,
    /// The text being edited; always resynchronized from `value` after a
    /// commit, whether accepted or rejected.
    pub text: String,
    /// Cursor position (character index)
    pub cursor: usize,
    /// Selection range (start, end) if any
    pub selection: Option<(usize, usize)>,
    /// Whether the embedded text field has keyboard focus
    pub is_focused: bool,
    /// Active press-and-hold repeat, if any
    pub repeat: Option<RepeatSession>,
}

impl Default for SpinnerState {
    fn default() -> Self {
        Self {
            value: 0,
            min: 0,
            max: 100,
            step: 1,
            text: String::from("0"),
            cursor: 1,
            selection: None,
            is_focused: false,
            repeat: None,
        }
    }
}

impl SpinnerState {
    /// Create state with the given initial value, clamped into the default
    /// `[0, 100]` range.
    pub fn new(value: i32) -> Self {
        let mut state = Self::default();
        state.value = value.clamp(state.min, state.max);
        state.sync_text();
        state
    }

    /// Restore from a persisted config. The value starts at zero clamped
    /// into the configured range.
    pub fn from_config(config: SpinnerConfig) -> Self {
        let mut state = Self {
            min: config.min,
            max: config.max,
            step: config.step.max(1),
            ..Self::default()
        };
        state.value = 0i32.clamp(state.min, state.max);
        state.sync_text();
        state
    }

    /// The persisted subset of this state.
    pub fn config(&self) -> SpinnerConfig {
        SpinnerConfig {
            min: self.min,
            max: self.max,
            step: self.step,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Set the value directly. Out-of-range values are silently ignored and
    /// setting the current value again is a no-op; returns whether the value
    /// changed (callers emit the value-changed notification on `true`).
    pub fn set_value(&mut self, value: i32) -> bool {
        if value < self.min || value > self.max || value == self.value {
            return false;
        }
        self.value = value;
        self.sync_text();
        true
    }

    /// Update both bounds. If the current value falls outside the new range
    /// it is clamped to the nearest bound; returns whether the value changed.
    pub fn set_range(&mut self, min: i32, max: i32) -> bool {
        self.min = min;
        self.max = max;
        let clamped = self.value.clamp(min, max);
        if clamped != self.value {
            self.value = clamped;
            self.sync_text();
            true
        } else {
            false
        }
    }

    /// Update the lower bound, clamping the value up if needed.
    pub fn set_min(&mut self, min: i32) -> bool {
        self.set_range(min, self.max)
    }

    /// Update the upper bound, clamping the value down if needed.
    pub fn set_max(&mut self, max: i32) -> bool {
        self.set_range(self.min, max)
    }

    /// Set the step size. Steps below 1 are floored to 1; no clamping side
    /// effect on the value.
    pub fn set_step(&mut self, step: i32) {
        self.step = step.max(1);
    }

    /// The canonical apply-a-candidate policy, shared by text commit,
    /// keyboard arrows and the auto-repeat loop:
    ///
    /// 1. candidate in range: accept it (no notification if unchanged);
    /// 2. candidate below `min` and value not already there: clamp to `min`;
    /// 3. candidate above `max` and value not already there: clamp to `max`;
    /// 4. otherwise the value is saturated at the relevant bound: reject
    ///    silently and restore the text buffer.
    ///
    /// Returns whether the value changed (i.e. whether to notify).
    pub fn apply(&mut self, candidate: i32) -> bool {
        let changed = if candidate >= self.min && candidate <= self.max {
            if candidate != self.value {
                self.value = candidate;
                true
            } else {
                false
            }
        } else if candidate < self.min && self.value != self.min {
            self.value = self.min;
            true
        } else if candidate > self.max && self.value != self.max {
            self.value = self.max;
            true
        } else {
            false
        };
        // Accepted or rejected, the buffer reflects the authoritative value.
        self.sync_text();
        changed
    }

    /// Apply one step in the given direction through the standard policy.
    pub fn step_once(&mut self, direction: StepDirection) -> bool {
        let candidate = self.value.saturating_add(direction.sign().saturating_mul(self.step));
        self.apply(candidate)
    }

    /// Parse the text buffer and apply it through the standard policy.
    /// Returns whether the value changed.
    pub fn commit_text(&mut self) -> bool {
        let candidate = self.parse_candidate();
        self.apply(candidate)
    }

    /// Parse the buffer as a signed integer. Unparsable or empty input is
    /// treated as zero; values beyond the i32 range saturate.
    pub fn parse_candidate(&self) -> i32 {
        match self.text.trim().parse::<i64>() {
            Ok(v) => v.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            Err(_) => 0,
        }
    }

    /// Rewrite the text buffer from the current value.
    pub fn sync_text(&mut self) {
        self.text = self.value.to_string();
        self.cursor = self.text.len();
        self.selection = None;
    }

    /// Focus the field, selecting all text.
    pub fn focus(&mut self) {
        self.is_focused = true;
        if !self.text.is_empty() {
            self.selection = Some((0, self.text.len()));
            self.cursor = self.text.len();
        }
    }

    /// Blur the field, dropping the selection.
    pub fn blur(&mut self) {
        self.is_focused = false;
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_control_contract() {
        let s = SpinnerState::default();
        assert_eq!(s.value(), 0);
        assert_eq!(s.min(), 0);
        assert_eq!(s.max(), 100);
        assert_eq!(s.step(), 1);
        assert_eq!(s.text, "0");
    }

    #[test]
    fn set_value_ignores_out_of_range() {
        let mut s = SpinnerState::default();
        assert!(!s.set_value(101));
        assert!(!s.set_value(-1));
        assert_eq!(s.value(), 0);
        assert!(s.set_value(42));
        assert_eq!(s.value(), 42);
        assert_eq!(s.text, "42");
    }

    #[test]
    fn set_value_is_idempotent() {
        let mut s = SpinnerState::default();
        s.set_value(10);
        assert!(!s.set_value(10), "current value must not notify");
    }

    #[test]
    fn clamp_policy_at_upper_bound() {
        // min=0 max=100 step=5 value=98: first increment clamps to 100 and
        // notifies, the second does nothing.
        let mut s = SpinnerState::default();
        s.set_step(5);
        s.set_value(98);
        assert!(s.step_once(StepDirection::Up));
        assert_eq!(s.value(), 100);
        assert!(!s.step_once(StepDirection::Up));
        assert_eq!(s.value(), 100);
    }

    #[test]
    fn clamp_policy_at_lower_bound() {
        let mut s = SpinnerState::default();
        s.set_step(7);
        s.set_value(3);
        assert!(s.step_once(StepDirection::Down));
        assert_eq!(s.value(), 0);
        assert!(!s.step_once(StepDirection::Down));
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn text_commit_clamps_then_rejects() {
        let mut s = SpinnerState::default();
        s.set_value(10);

        s.text = String::from("500");
        assert!(s.commit_text());
        assert_eq!(s.value(), 100);
        assert_eq!(s.text, "100");

        // Already saturated: silent rejection, buffer reverts.
        s.text = String::from("500");
        assert!(!s.commit_text());
        assert_eq!(s.value(), 100);
        assert_eq!(s.text, "100");
    }

    #[test]
    fn malformed_text_commits_as_zero() {
        let mut s = SpinnerState::default();
        s.set_value(10);
        s.text = String::from("-");
        assert!(s.commit_text());
        assert_eq!(s.value(), 0);
        assert_eq!(s.text, "0");

        s.text = String::new();
        assert!(!s.commit_text());
        assert_eq!(s.text, "0");
    }

    #[test]
    fn overflow_saturates_before_policy() {
        let mut s = SpinnerState::default();
        s.text = String::from("99999999999999");
        s.commit_text();
        assert_eq!(s.value(), 100);
    }

    #[test]
    fn range_update_clamps_value() {
        let mut s = SpinnerState::default();
        s.set_value(50);
        assert!(s.set_range(60, 100));
        assert_eq!(s.value(), 60);
        assert_eq!(s.text, "60");
        assert!(!s.set_range(0, 100));
    }

    #[test]
    fn negative_range() {
        let mut s = SpinnerState::default();
        s.set_range(-500, 500);
        s.set_step(5);
        assert!(s.set_value(-500));
        assert!(!s.step_once(StepDirection::Down));
        assert!(s.step_once(StepDirection::Up));
        assert_eq!(s.value(), -495);
    }

    #[test]
    fn step_floor_is_one() {
        let mut s = SpinnerState::default();
        s.set_step(0);
        assert_eq!(s.step(), 1);
        s.set_step(-4);
        assert_eq!(s.step(), 1);
    }

    #[test]
    fn apply_resyncs_text_without_value_change() {
        let mut s = SpinnerState::default();
        s.set_value(7);
        s.text = String::from("007");
        assert!(!s.commit_text());
        assert_eq!(s.text, "7");
    }

    #[test]
    fn repeat_session_due_steps() {
        let now = Instant::now();
        let mut session = RepeatSession::new(StepDirection::Up, now);

        assert_eq!(session.due_steps(now), 0);
        assert_eq!(session.due_steps(now + Duration::from_millis(249)), 0);
        assert_eq!(session.due_steps(now + Duration::from_millis(250)), 1);
        // 250ms delay + 2 * 50ms intervals: three repeats in total.
        let later = now + Duration::from_millis(350);
        assert_eq!(session.due_steps(later), 3);

        session.mark_applied(3);
        assert_eq!(session.due_steps(later), 0);
        assert_eq!(
            session.next_deadline(),
            now + Duration::from_millis(250 + 3 * 50)
        );
    }

    #[test]
    fn repeat_session_catches_up_incrementally() {
        let now = Instant::now();
        let mut session = RepeatSession::new(StepDirection::Down, now);
        let t1 = now + Duration::from_millis(260);
        assert_eq!(session.due_steps(t1), 1);
        session.mark_applied(1);
        let t2 = now + Duration::from_millis(320);
        assert_eq!(session.due_steps(t2), 1);
    }

    #[test]
    fn config_round_trip() {
        let mut s = SpinnerState::default();
        s.set_range(-500, 500);
        s.set_step(5);
        let json = serde_json::to_string(&s.config()).unwrap();
        let config: SpinnerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, s.config());

        let restored = SpinnerState::from_config(config);
        assert_eq!(restored.min(), -500);
        assert_eq!(restored.max(), 500);
        assert_eq!(restored.step(), 5);
        assert_eq!(restored.value(), 0);
    }

    #[test]
    fn from_config_clamps_initial_value_into_range() {
        let restored = SpinnerState::from_config(SpinnerConfig {
            min: 10,
            max: 20,
            step: 1,
        });
        assert_eq!(restored.value(), 10);
        assert_eq!(restored.text, "10");
    }
}
