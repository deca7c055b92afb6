//! Gesture state machine for a single pane.
//!
//! `PaneCore` holds all state that survives between events (the active
//! gesture, the committed position, the settle duration) and turns each
//! normalized input event into a list of [`Action`]s. It never touches a
//! capability directly, so it can be driven without a browser.
//!
//! States: `Idle` and `Dragging`. Down always (re)starts a gesture; move and
//! up are ignored while idle.

#[cfg(test)]
#[path = "pane_test.rs"]
mod pane_test;

use crate::consts::{DEFAULT_DURATION_MS, INSTANT_MS};
use crate::events::PaneEvent;
use crate::geometry::{Point, Range, Rect};
use crate::input::{GestureState, InputEvent, InputState};

/// Effects requested by the state machine, executed in order by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Set the content's transition duration in milliseconds.
    SetTransition(u32),
    /// Place the content at this offset.
    ApplyOffset(Point),
    /// Notify observers.
    Emit(PaneEvent),
}

/// Pure pane state.
#[derive(Debug, Clone)]
pub struct PaneCore {
    pub input: InputState,
    position: Point,
    duration_ms: u32,
    last_range: Option<Range>,
}

impl Default for PaneCore {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS)
    }
}

impl PaneCore {
    #[must_use]
    pub fn new(duration_ms: u32) -> Self {
        Self { input: InputState::Idle, position: Point::default(), duration_ms, last_range: None }
    }

    // --- Configuration ---

    /// Set the settle duration used by the next release.
    pub fn set_duration(&mut self, ms: u32) {
        self.duration_ms = ms;
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration_ms
    }

    // --- Queries ---

    /// Offset committed by the most recent release.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[must_use]
    pub fn gesture(&self) -> Option<GestureState> {
        self.input.gesture().copied()
    }

    /// Range measured by the current or most recent gesture.
    #[must_use]
    pub fn range(&self) -> Option<Range> {
        self.last_range
    }

    // --- Input events ---

    /// Stop any in-flight settle animation. Issued on pointer-down before the
    /// content is measured.
    #[must_use]
    pub fn halt_transition(&self) -> Vec<Action> {
        vec![Action::SetTransition(INSTANT_MS)]
    }

    /// Begin a gesture, discarding any gesture already in progress.
    ///
    /// `viewport` and `content` are measured by the caller after the
    /// transition has been halted; the origin is where the content is drawn.
    pub fn on_gesture_start(&mut self, ev: &mut InputEvent, viewport: &Rect, content: &Rect) -> Vec<Action> {
        ev.stop_propagation();

        let range = Range::between(viewport, content);
        let origin = content.offset_within(viewport);
        if let Some(prev) = self.input.gesture() {
            tracing::debug!(prev_start_x = prev.start.x, prev_start_y = prev.start.y, "gesture restarted");
        }
        self.input = InputState::Dragging(GestureState::new(ev.point, origin, range, ev.timestamp_ms));
        self.last_range = Some(range);

        tracing::debug!(
            x = ev.point.x,
            y = ev.point.y,
            origin_x = origin.x,
            origin_y = origin.y,
            dif_x = range.dif_x,
            dif_y = range.dif_y,
            "gesture start"
        );
        vec![Action::Emit(PaneEvent::start(ev.point))]
    }

    /// Track the pointer with rubber-band resistance past either bound.
    pub fn on_gesture_move(&mut self, ev: &mut InputEvent) -> Vec<Action> {
        let Some(gesture) = self.input.gesture_mut() else {
            return Vec::new();
        };
        if ev.is_multi_point() {
            return Vec::new();
        }

        let mut delta = ev.point.delta_from(gesture.start);
        if gesture.range.locks_x() {
            delta.x = 0.0;
        }
        if gesture.range.locks_y() {
            delta.y = 0.0;
        }
        gesture.delta = delta;

        ev.prevent_default();

        let candidate = gesture.candidate();
        let resisted = gesture.range.resist(candidate);
        tracing::trace!(
            candidate_x = candidate.x,
            candidate_y = candidate.y,
            x = resisted.x,
            y = resisted.y,
            "gesture move"
        );
        vec![Action::ApplyOffset(resisted), Action::Emit(PaneEvent::swipe(resisted))]
    }

    /// Settle the content inside its range and commit the position.
    pub fn on_gesture_end(&mut self, ev: &mut InputEvent) -> Vec<Action> {
        let InputState::Dragging(gesture) = self.input else {
            return Vec::new();
        };
        ev.stop_propagation();

        let settled = gesture.range.clamp(gesture.candidate());
        self.position = settled;
        self.input = InputState::Idle;

        tracing::debug!(
            x = settled.x,
            y = settled.y,
            elapsed_ms = ev.timestamp_ms - gesture.started_at,
            "gesture end"
        );
        vec![
            Action::SetTransition(self.duration_ms),
            Action::ApplyOffset(settled),
            Action::Emit(PaneEvent::end(settled)),
        ]
    }

    /// Re-apply the committed position without touching the transition.
    #[must_use]
    pub fn redraw(&self) -> Vec<Action> {
        vec![Action::ApplyOffset(self.position)]
    }
}
