//! Input model: normalized pointer events and the gesture state machine.
//!
//! Host adapters translate whatever the platform delivers (mouse events,
//! touch lists) into an [`InputEvent`] carrying one coordinate pair and the
//! number of active contacts. The core never branches on input modality.
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::cell::Cell;

use crate::geometry::{Point, Range};

/// Logical gesture phases the pane subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Mouse-down or touch-start.
    Down,
    /// Mouse-move or touch-move.
    Move,
    /// Mouse-up or touch-end.
    Up,
}

impl GestureKind {
    /// Native DOM event names that map onto this logical kind.
    #[must_use]
    pub fn native_names(self) -> &'static [&'static str] {
        match self {
            Self::Down => &["mousedown", "touchstart"],
            Self::Move => &["mousemove", "touchmove"],
            Self::Up => &["mouseup", "touchend"],
        }
    }
}

/// A pointer event normalized to a single coordinate pair.
///
/// Handlers record propagation and default-action suppression on the event;
/// the adapter that produced it forwards those requests to the native event
/// after the handler returns.
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    /// Page coordinates of the pointer (first contact for touch input).
    pub point: Point,
    /// Number of simultaneous contacts; `1` for mouse input.
    pub contacts: u32,
    /// Host timestamp of the native event in milliseconds.
    pub timestamp_ms: f64,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl InputEvent {
    #[must_use]
    pub fn new(point: Point, contacts: u32, timestamp_ms: f64) -> Self {
        Self { point, contacts, timestamp_ms, propagation_stopped: false, default_prevented: false }
    }

    /// A single-contact event at `(x, y)`.
    #[must_use]
    pub fn at(x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self::new(Point::new(x, y), 1, timestamp_ms)
    }

    /// More than one simultaneous contact (pinch, rotate, ...).
    #[must_use]
    pub fn is_multi_point(&self) -> bool {
        self.contacts > 1
    }

    /// Keep the event from reaching outer containers.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Suppress the platform's default action (native scrolling).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[must_use]
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Admits each native event once, however many subscriptions it reaches.
///
/// A move dispatched on the content bubbles up to the capture surface, so
/// both of a pane's move subscriptions see the same native event. Adapters
/// compare events by identity here; two distinct events are always admitted,
/// even when their timestamps or coordinates coincide.
pub struct RepeatFilter<T> {
    last: Cell<Option<T>>,
}

impl<T> Default for RepeatFilter<T> {
    fn default() -> Self {
        Self { last: Cell::new(None) }
    }
}

impl<T: Clone + PartialEq> RepeatFilter<T> {
    /// `false` when `event` is the one admitted last.
    #[must_use]
    pub fn admit(&self, event: &T) -> bool {
        let previous = self.last.replace(Some(event.clone()));
        previous.as_ref() != Some(event)
    }
}

/// Snapshot of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    /// Pointer position at pointer-down.
    pub start: Point,
    /// Pointer delta recorded by the last handled move (after axis locking).
    pub delta: Point,
    /// Content offset measured at pointer-down.
    pub origin: Point,
    /// Range measured at pointer-down.
    pub range: Range,
    /// Timestamp of the pointer-down event in milliseconds.
    pub started_at: f64,
}

impl GestureState {
    #[must_use]
    pub fn new(start: Point, origin: Point, range: Range, started_at: f64) -> Self {
        Self { start, delta: Point::default(), origin, range, started_at }
    }

    /// Raw (unresisted) content offset for the recorded delta.
    #[must_use]
    pub fn candidate(&self) -> Point {
        Point { x: self.delta.x + self.origin.x, y: self.delta.y + self.origin.y }
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer is down and the content tracks it.
    Dragging(GestureState),
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&GestureState> {
        match self {
            Self::Idle => None,
            Self::Dragging(g) => Some(g),
        }
    }

    pub fn gesture_mut(&mut self) -> Option<&mut GestureState> {
        match self {
            Self::Idle => None,
            Self::Dragging(g) => Some(g),
        }
    }
}
