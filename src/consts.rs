//! Shared numeric constants for the swipe pane.

// ── Timing ──────────────────────────────────────────────────────

/// Transition applied to the settle animation after release, in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Transition used while the pointer is down: offsets apply instantly.
pub const INSTANT_MS: u32 = 0;

// ── Edge resistance ─────────────────────────────────────────────

/// Fraction of an overshoot past a bound that is cancelled while dragging.
pub const RESISTANCE: f64 = 0.5;

/// A range extent smaller than this (in pixels) counts as zero and locks the axis.
pub const AXIS_LOCK_EPSILON: f64 = 1e-9;
