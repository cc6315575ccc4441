// Host-side tests for the hover cross-fade tween.
// The main crate is wasm-only, so we pull the pure core in by path.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::hover::{HoverPhase, HoverTween};

#[test]
fn starts_idle_at_zero() {
    let t = HoverTween::new(1.0);
    assert_eq!(t.value(0.0), 0.0);
    assert_eq!(t.value(123.0), 0.0);
    assert_eq!(t.phase(5.0), HoverPhase::Idle);
}

#[test]
fn enter_reaches_one_after_duration_by_wall_clock() {
    let mut t = HoverTween::new(1.0);
    t.enter(10.0);
    assert_eq!(t.phase(10.0), HoverPhase::Entering);
    let mid = t.value(10.5);
    assert!(mid > 0.0 && mid < 1.0);
    assert_eq!(t.value(11.0), 1.0);
    assert_eq!(t.value(50.0), 1.0);
    assert_eq!(t.phase(11.0), HoverPhase::Hovering);
}

#[test]
fn value_is_independent_of_how_often_it_is_sampled() {
    let mut a = HoverTween::new(1.0);
    let b = {
        let mut b = HoverTween::new(1.0);
        b.enter(0.0);
        b
    };
    a.enter(0.0);
    for i in 0..100 {
        let _ = a.value(i as f64 * 0.003);
    }
    assert_eq!(a.value(0.3), b.value(0.3));
}

#[test]
fn leave_mid_enter_reverses_from_current_value() {
    let mut t = HoverTween::new(1.0);
    t.enter(0.0);
    // eased progress hits 0.4 at 1 - sqrt(0.6)
    let t_leave = 1.0 - 0.6f64.sqrt();
    let v = t.value(t_leave);
    assert!((v - 0.4).abs() < 1e-4, "expected 0.4, got {v}");

    t.leave(t_leave);
    assert_eq!(t.phase(t_leave), HoverPhase::Leaving);
    // no snap in either direction
    assert!((t.value(t_leave) - v).abs() < 1e-6);
    let mut prev = v;
    for step in 1..=20 {
        let now = t_leave + step as f64 * 0.05;
        let cur = t.value(now);
        assert!(cur <= prev + 1e-6, "value rose while leaving");
        assert!(cur <= 0.4 + 1e-6, "value restarted from 1");
        prev = cur;
    }
    assert_eq!(t.value(t_leave + 1.0), 0.0);
    assert_eq!(t.phase(t_leave + 1.0), HoverPhase::Idle);
}

#[test]
fn repeated_enter_does_not_restart_tween() {
    let mut t = HoverTween::new(1.0);
    t.enter(0.0);
    let v = t.value(0.5);
    t.enter(0.5);
    assert_eq!(t.value(0.5), v);
    assert_eq!(t.value(1.0), 1.0);
}

#[test]
fn zero_duration_switches_immediately() {
    let mut t = HoverTween::new(0.0);
    t.enter(3.0);
    assert_eq!(t.value(3.0), 1.0);
    t.leave(4.0);
    assert_eq!(t.value(4.0), 0.0);
}
