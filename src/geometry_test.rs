#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// --- Point / Rect ---

#[test]
fn point_delta_from() {
    let d = pt(40.0, 50.0).delta_from(pt(100.0, 50.0));
    assert_eq!(d, pt(-60.0, 0.0));
}

#[test]
fn rect_offset_within_is_relative_to_outer_corner() {
    let viewport = Rect::new(10.0, 20.0, 300.0, 200.0);
    let content = Rect::new(-50.0, 20.0, 600.0, 200.0);
    assert_eq!(content.offset_within(&viewport), pt(-60.0, 0.0));
}

// --- Range measurement ---

#[test]
fn range_between_is_viewport_minus_content() {
    let viewport = Rect::new(0.0, 0.0, 300.0, 200.0);
    let content = Rect::new(0.0, 0.0, 600.0, 200.0);
    let range = Range::between(&viewport, &content);
    assert_eq!(range.dif_x, -300.0);
    assert_eq!(range.dif_y, 0.0);
}

#[test]
fn range_ignores_rect_positions() {
    let viewport = Rect::new(5.0, 5.0, 300.0, 200.0);
    let content = Rect::new(-120.0, 77.0, 400.0, 500.0);
    assert_eq!(Range::between(&viewport, &content), Range::new(-100.0, -300.0));
}

#[test]
fn zero_extent_locks_axis() {
    let range = Range::new(-300.0, 0.0);
    assert!(!range.locks_x());
    assert!(range.locks_y());
}

#[test]
fn positive_extent_does_not_lock() {
    let range = Range::new(50.0, 0.5);
    assert!(!range.locks_x());
    assert!(!range.locks_y());
}

// --- Resistance ---

#[test]
fn resist_inside_range_is_identity() {
    let range = Range::new(-300.0, -100.0);
    assert_eq!(range.resist(pt(-60.0, -40.0)), pt(-60.0, -40.0));
}

#[test]
fn resist_halves_overshoot_past_zero() {
    let range = Range::new(-300.0, -100.0);
    let r = range.resist(pt(20.0, 340.0));
    assert!(approx_eq(r.x, 10.0));
    assert!(approx_eq(r.y, 170.0));
}

#[test]
fn resist_halves_underrun_past_dif() {
    let range = Range::new(-300.0, -100.0);
    let r = range.resist(pt(-340.0, -160.0));
    assert!(approx_eq(r.x, -320.0));
    assert!(approx_eq(r.y, -130.0));
}

#[test]
fn resist_at_exact_bounds_is_identity() {
    let range = Range::new(-300.0, -100.0);
    assert_eq!(range.resist(pt(0.0, -100.0)), pt(0.0, -100.0));
    assert_eq!(range.resist(pt(-300.0, 0.0)), pt(-300.0, 0.0));
}

#[test]
fn resist_is_strictly_monotonic_in_overshoot() {
    let range = Range::new(-300.0, 0.0);
    let mut prev = range.resist(pt(1.0, 0.0)).x;
    for o in [2.0, 5.0, 40.0, 250.0, 1000.0] {
        let next = range.resist(pt(o, 0.0)).x;
        assert!(next > prev, "{next} should exceed {prev}");
        assert!(approx_eq(next, o * 0.5));
        prev = next;
    }
}

#[test]
fn resist_underrun_is_strictly_monotonic() {
    let range = Range::new(-300.0, 0.0);
    let mut prev = range.resist(pt(-301.0, 0.0)).x;
    for o in [2.0, 10.0, 90.0] {
        let next = range.resist(pt(-300.0 - o, 0.0)).x;
        assert!(next < prev);
        assert!(approx_eq(next, -300.0 - o * 0.5));
        prev = next;
    }
}

#[test]
fn resist_with_inverted_range_applies_both_rules() {
    // Content narrower than the viewport: dif_x = +100.
    let range = Range::new(100.0, 0.0);
    // 40 > 0 halves to 20, then 20 < 100 pulls halfway to 60.
    assert!(approx_eq(range.resist(pt(40.0, 0.0)).x, 60.0));
}

// --- Clamp ---

#[test]
fn clamp_bounds_into_range() {
    let range = Range::new(-300.0, -100.0);
    assert_eq!(range.clamp(pt(340.0, 12.0)), pt(0.0, 0.0));
    assert_eq!(range.clamp(pt(-999.0, -101.0)), pt(-300.0, -100.0));
    assert_eq!(range.clamp(pt(-60.0, -50.0)), pt(-60.0, -50.0));
}

#[test]
fn clamp_result_is_always_contained() {
    let range = Range::new(-300.0, -20.0);
    for x in [-1000.0, -300.0, -150.5, 0.0, 0.1, 999.0] {
        for y in [-50.0, -20.0, -3.0, 0.0, 40.0] {
            let c = range.clamp(pt(x, y));
            assert!(range.contains(c), "{c:?} escaped {range:?}");
        }
    }
}

#[test]
fn clamp_with_inverted_range_rests_at_zero() {
    let range = Range::new(100.0, 50.0);
    assert_eq!(range.clamp(pt(30.0, -30.0)), pt(0.0, 0.0));
}

#[test]
fn contains_checks_both_axes() {
    let range = Range::new(-300.0, 0.0);
    assert!(range.contains(pt(-300.0, 0.0)));
    assert!(!range.contains(pt(-301.0, 0.0)));
    assert!(!range.contains(pt(-10.0, 1.0)));
}
