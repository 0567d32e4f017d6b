// Host-side tests for data-attribute option parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod options {
    include!("../src/options.rs");
}

use options::*;
use std::collections::HashMap;
use std::time::Duration;

fn parse(attrs: &[(&str, &str)]) -> anyhow::Result<CardOptions> {
    let map: HashMap<String, String> = attrs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CardOptions::from_attributes(|name| map.get(name).cloned())
}

#[test]
fn no_attributes_gives_defaults() {
    let opts = parse(&[]).unwrap();
    assert_eq!(opts, CardOptions::default());
    assert!(opts.tilt.enabled);
    assert_eq!(opts.initial_duration, Duration::from_millis(1200));
}

#[test]
fn tilt_can_be_disabled() {
    for v in ["false", "0", "no", " FALSE "] {
        assert!(!parse(&[(ATTR_ENABLE_TILT, v)]).unwrap().tilt.enabled, "{v}");
    }
    for v in ["", "true", "1", "yes"] {
        assert!(parse(&[(ATTR_ENABLE_TILT, v)]).unwrap().tilt.enabled, "{v}");
    }
}

#[test]
fn numeric_overrides() {
    let opts = parse(&[
        (ATTR_STEADY_TAU, "0.2"),
        (ATTR_INITIAL_TAU, " 0.9 "),
        (ATTR_INITIAL_DURATION_MS, "800"),
    ])
    .unwrap();
    assert_eq!(opts.tilt.steady_tau, 0.2);
    assert_eq!(opts.tilt.initial_tau, 0.9);
    assert_eq!(opts.initial_duration, Duration::from_millis(800));
}

#[test]
fn malformed_values_are_errors() {
    let err = parse(&[(ATTR_STEADY_TAU, "fast")]).unwrap_err();
    assert!(format!("{err:#}").contains("data-steady-tau"));
    assert!(parse(&[(ATTR_ENABLE_TILT, "maybe")]).is_err());
    assert!(parse(&[(ATTR_INITIAL_DURATION_MS, "-5")]).is_err());
}

#[test]
fn invalid_combinations_fail_validation() {
    let err = parse(&[(ATTR_STEADY_TAU, "0.8")]).unwrap_err();
    assert!(err.to_string().contains("slower"));
    assert!(parse(&[(ATTR_INITIAL_TAU, "-1")]).is_err());
}
