// Host-side tests for constants and their relationships.
// The front-end crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use savoir_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_ranges_are_ordered() {
    for (lo, hi) in [
        SPAWN_ANGLE_DEG,
        SPAWN_WIDTH,
        SPAWN_SPEED,
        SPAWN_OPACITY,
        SPAWN_HUE,
        SPAWN_PULSE_SPEED,
        RECYCLE_WIDTH,
        RECYCLE_SPEED,
        RECYCLE_OPACITY,
    ] {
        assert!(lo < hi, "{lo} >= {hi}");
    }
    assert!(SPAWN_SPEED.0 > 0.0 && RECYCLE_SPEED.0 > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_keeps_alpha_in_unit_range() {
    assert!(PULSE_BASE - PULSE_DEPTH >= 0.0);
    assert!(PULSE_BASE + PULSE_DEPTH <= 1.0);
    assert!(SPAWN_OPACITY.1 <= 1.0 && RECYCLE_OPACITY.1 <= 1.0);
}

#[test]
fn gradient_stops_are_symmetric_and_sorted() {
    let n = GRADIENT_STOPS.len();
    for i in 1..n {
        assert!(GRADIENT_STOPS[i].0 > GRADIENT_STOPS[i - 1].0);
    }
    for i in 0..n {
        let (a, b) = (GRADIENT_STOPS[i], GRADIENT_STOPS[n - 1 - i]);
        assert!((a.0 - (1.0 - b.0)).abs() < 1e-6);
        assert_eq!(a.1, b.1);
    }
    assert_eq!(GRADIENT_STOPS[0].1, 0.0);
    assert_eq!(GRADIENT_STOPS[n - 1].1, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn recycled_hues_stay_in_spawn_palette() {
    assert_eq!(RECYCLE_HUE_BASE, SPAWN_HUE.0);
    assert_eq!(RECYCLE_HUE_BASE + RECYCLE_HUE_SPAN, SPAWN_HUE.1);
    assert!(BEAM_BLUR_PX > LAYER_BLUR_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn front_end_timings_are_positive() {
    assert!(FPS_REPORT_INTERVAL_SEC > 0.0);
    assert!(QUIZ_FEEDBACK_DELAY_MS > 0);
    assert!(QUIZ_INCORRECT_PREFIX.ends_with(": "));
    assert_ne!(QUIZ_CORRECT_CLASS, QUIZ_INCORRECT_CLASS);
}

#[test]
fn beam_cap_admits_the_default() {
    assert!(MAX_MINIMUM_BEAMS >= DEFAULT_MINIMUM_BEAMS);
}
