//! Engine tuning.
//!
//! [`TiltConfig::default`] reproduces the reference feel. Hosts that accept
//! overrides from outside (markup attributes, query strings) should run
//! [`TiltConfig::validate`] before building an engine from them.

use crate::constants::{INITIAL_TAU_SEC, SETTLE_THRESHOLD_PX, STEADY_TAU_SEC};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// When false no engine is created and the card never tilts.
    pub enabled: bool,
    /// Smoothing time constant in seconds after the initial phase.
    pub steady_tau: f64,
    /// Smoothing time constant in seconds while the initial phase lasts.
    pub initial_tau: f64,
    /// Per-axis distance in local pixels below which motion may stop.
    pub settle_threshold: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            steady_tau: STEADY_TAU_SEC,
            initial_tau: INITIAL_TAU_SEC,
            settle_threshold: SETTLE_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive, finite number of seconds (got {value})")]
    InvalidTimeConstant { name: &'static str, value: f64 },
    #[error("initial tau ({initial}) must be slower than steady tau ({steady})")]
    InitialNotSlower { initial: f64, steady: f64 },
    #[error("settle threshold must be finite and non-negative (got {0})")]
    InvalidThreshold(f64),
}

impl TiltConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_tau("steady tau", self.steady_tau)?;
        check_tau("initial tau", self.initial_tau)?;
        if self.initial_tau <= self.steady_tau {
            return Err(ConfigError::InitialNotSlower {
                initial: self.initial_tau,
                steady: self.steady_tau,
            });
        }
        if !self.settle_threshold.is_finite() || self.settle_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.settle_threshold));
        }
        Ok(())
    }

    /// Time constant in effect for a frame, given whether the initial phase is still open.
    #[inline]
    pub fn tau(&self, in_initial_phase: bool) -> f64 {
        if in_initial_phase {
            self.initial_tau
        } else {
            self.steady_tau
        }
    }
}

fn check_tau(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTimeConstant { name, value })
    }
}
