// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;

#[test]
fn offset_is_relative_to_rect_origin() {
    let offset = offset_from_rect(DVec2::new(420.0, 310.0), DVec2::new(400.0, 250.0));
    assert_eq!(offset, DVec2::new(20.0, 60.0));
}

#[test]
fn offset_is_not_clamped() {
    let offset = offset_from_rect(DVec2::new(10.0, 1000.0), DVec2::new(400.0, 250.0));
    assert_eq!(offset, DVec2::new(-390.0, 750.0));
}

#[test]
fn initial_offset_sits_near_top_right() {
    assert_eq!(initial_offset(340.0), DVec2::new(270.0, 60.0));
    // unmeasured card still yields a finite start
    assert_eq!(initial_offset(0.0), DVec2::new(-70.0, 60.0));
}
