// Host-side tests for engine configuration and the card interaction policy.

use glam::DVec2;
use tilt_core::constants::{INITIAL_TAU_SEC, STEADY_TAU_SEC};
use tilt_core::{CardState, ConfigError, TiltConfig, TiltSnapshot};

#[test]
fn default_config_is_valid() {
    let config = TiltConfig::default();
    assert!(config.enabled);
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.tau(true), INITIAL_TAU_SEC);
    assert_eq!(config.tau(false), STEADY_TAU_SEC);
}

#[test]
fn rejects_bad_time_constants() {
    let config = TiltConfig {
        steady_tau: 0.0,
        ..TiltConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidTimeConstant {
            name: "steady tau",
            value: 0.0
        })
    );

    let config = TiltConfig {
        initial_tau: f64::INFINITY,
        ..TiltConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTimeConstant { name: "initial tau", .. })
    ));
}

#[test]
fn initial_phase_must_be_slower() {
    let config = TiltConfig {
        steady_tau: 0.5,
        initial_tau: 0.2,
        ..TiltConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::InitialNotSlower {
            initial: 0.2,
            steady: 0.5
        }
    );
    assert_eq!(
        err.to_string(),
        "initial tau (0.2) must be slower than steady tau (0.5)"
    );
}

#[test]
fn rejects_bad_threshold() {
    for threshold in [-0.1, f64::NAN] {
        let config = TiltConfig {
            settle_threshold: threshold,
            ..TiltConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }
}

#[test]
fn snapshot_settle_check_uses_euclidean_distance() {
    let snap = TiltSnapshot {
        current: DVec2::new(0.0, 0.0),
        target: DVec2::new(0.4, 0.4),
    };
    assert!((snap.distance() - 0.32_f64.sqrt()).abs() < 1e-12);
    assert!(snap.is_settled_within(0.6));
    assert!(!snap.is_settled_within(0.5));
}

#[test]
fn pointer_enter_activates_card() {
    let mut state = CardState::default();
    assert!(state.accepts_pointer());
    assert!(state.pointer_entered());
    assert!(state.active && state.entering);
    state.enter_transition_elapsed();
    assert!(state.active && !state.entering);
    state.settled();
    assert!(!state.active);
}

#[test]
fn flipped_card_ignores_pointer() {
    let mut state = CardState::default();
    state.pointer_entered();
    assert!(state.toggle_flip(), "flipping to the back recenters");
    assert!(state.flipped);
    assert!(!state.active && !state.entering);
    assert!(!state.accepts_pointer());
    assert!(!state.pointer_entered());
    assert!(!state.active);

    assert!(!state.toggle_flip(), "flipping back does not recenter");
    assert!(!state.flipped);
    assert!(state.accepts_pointer());
}

#[test]
fn hovered_control_suppresses_tracking() {
    let mut state = CardState::default();
    state.pointer_entered();
    assert!(state.set_control_hovered(true));
    assert!(!state.active && !state.entering);
    assert!(!state.accepts_pointer());
    assert!(!state.set_control_hovered(false));
    assert!(state.accepts_pointer());
}
