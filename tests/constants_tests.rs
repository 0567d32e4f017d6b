// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use tilt_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn time_constants_are_positive_and_ordered() {
    assert!(STEADY_TAU_SEC > 0.0);
    assert!(INITIAL_TAU_SEC > STEADY_TAU_SEC);
    // roughly 1:4 between steady and initial response
    let ratio = INITIAL_TAU_SEC / STEADY_TAU_SEC;
    assert!(ratio > 3.5 && ratio < 5.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mapping_ranges_are_sane() {
    assert!(BACKGROUND_MIN >= 0.0 && BACKGROUND_MAX <= PERCENT_MAX);
    assert!(BACKGROUND_MIN < PERCENT_CENTER && PERCENT_CENTER < BACKGROUND_MAX);
    assert_eq!(PERCENT_CENTER * 2.0, PERCENT_MAX);
    assert!(ROTATE_X_DIVISOR > ROTATE_Y_DIVISOR);
    assert!(MIN_SURFACE_DIMENSION > 0.0);
    assert!(OUTPUT_PRECISION > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn host_thresholds_relate_to_engine() {
    // leave-settle tolerance is looser than the per-axis stop threshold
    assert!(LEAVE_SETTLE_RADIUS_PX > SETTLE_THRESHOLD_PX);
    assert!(ENTER_TRANSITION_MS > 0);
    assert!(INITIAL_DURATION_MS > 0);
    assert!(INITIAL_X_OFFSET > 0.0 && INITIAL_Y_OFFSET > 0.0);
}
