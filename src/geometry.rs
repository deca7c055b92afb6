//! Points, rectangles, and the movable range of the content surface.
//!
//! All coordinates are CSS pixels. Offsets are relative to the content's
//! natural top-left alignment inside the viewport, so a content surface wider
//! than its viewport pans through negative `x` values.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::{AXIS_LOCK_EPSILON, RESISTANCE};

/// A point or offset in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// An axis-aligned box as reported by a geometry provider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner of `self` relative to the top-left corner of `outer`.
    #[must_use]
    pub fn offset_within(&self, outer: &Rect) -> Point {
        Point { x: self.x - outer.x, y: self.y - outer.y }
    }
}

/// Legal resting offsets for the content, derived once per gesture start.
///
/// `dif_x` / `dif_y` are viewport extent minus content extent. Resting
/// offsets lie in `[dif_x, 0] × [dif_y, 0]`; both are negative when the
/// content is larger than the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    pub dif_x: f64,
    pub dif_y: f64,
}

impl Range {
    #[must_use]
    pub fn new(dif_x: f64, dif_y: f64) -> Self {
        Self { dif_x, dif_y }
    }

    /// Measure the range of `content` inside `viewport`.
    #[must_use]
    pub fn between(viewport: &Rect, content: &Rect) -> Self {
        Self { dif_x: viewport.width - content.width, dif_y: viewport.height - content.height }
    }

    /// Content exactly fills the viewport horizontally; there is nothing to pan.
    #[must_use]
    pub fn locks_x(&self) -> bool {
        self.dif_x.abs() < AXIS_LOCK_EPSILON
    }

    /// Content exactly fills the viewport vertically; there is nothing to pan.
    #[must_use]
    pub fn locks_y(&self) -> bool {
        self.dif_y.abs() < AXIS_LOCK_EPSILON
    }

    /// Damp the part of `candidate` lying outside the range (rubber band).
    #[must_use]
    pub fn resist(&self, candidate: Point) -> Point {
        Point { x: resist_axis(candidate.x, self.dif_x), y: resist_axis(candidate.y, self.dif_y) }
    }

    /// Hard-bound `candidate` into `[dif_x, 0] × [dif_y, 0]`.
    #[must_use]
    pub fn clamp(&self, candidate: Point) -> Point {
        Point { x: clamp_axis(candidate.x, self.dif_x), y: clamp_axis(candidate.y, self.dif_y) }
    }

    /// Whether `offset` is a legal resting position.
    #[must_use]
    pub fn contains(&self, offset: Point) -> bool {
        self.dif_x <= offset.x && offset.x <= 0.0 && self.dif_y <= offset.y && offset.y <= 0.0
    }
}

/// Halve the overshoot past `0` and the underrun past `dif`.
///
/// Both checks run in sequence. When `dif > 0` (content smaller than the
/// viewport) a value can trip both, matching the drag behavior of a pane
/// whose range is inverted.
fn resist_axis(mut p: f64, dif: f64) -> f64 {
    if p > 0.0 {
        p += p * -RESISTANCE;
    }
    if p < dif {
        p += (dif - p) * RESISTANCE;
    }
    p
}

// `f64::clamp` panics when `min > max`, which happens for content smaller
// than its viewport, so the bounds are applied one at a time.
fn clamp_axis(p: f64, dif: f64) -> f64 {
    p.max(dif).min(0.0)
}
