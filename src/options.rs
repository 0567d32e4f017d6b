// Per-card overrides read from `data-*` attributes on the wrapper element:
//   <div data-profile-card data-enable-tilt="true" data-steady-tau="0.2">

use super::constants::INITIAL_DURATION_MS;
use anyhow::{bail, Context, Result};
use std::time::Duration;
use tilt_core::TiltConfig;

pub const ATTR_ENABLE_TILT: &str = "data-enable-tilt";
pub const ATTR_STEADY_TAU: &str = "data-steady-tau";
pub const ATTR_INITIAL_TAU: &str = "data-initial-tau";
pub const ATTR_INITIAL_DURATION_MS: &str = "data-initial-duration-ms";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardOptions {
    pub tilt: TiltConfig,
    pub initial_duration: Duration,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            tilt: TiltConfig::default(),
            initial_duration: Duration::from_millis(INITIAL_DURATION_MS),
        }
    }
}

impl CardOptions {
    /// Build options from an attribute lookup; absent attributes keep defaults.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut opts = Self::default();
        if let Some(v) = get(ATTR_ENABLE_TILT) {
            opts.tilt.enabled =
                parse_bool(&v).with_context(|| format!("{ATTR_ENABLE_TILT}={v:?}"))?;
        }
        if let Some(v) = get(ATTR_STEADY_TAU) {
            opts.tilt.steady_tau = parse_number(ATTR_STEADY_TAU, &v)?;
        }
        if let Some(v) = get(ATTR_INITIAL_TAU) {
            opts.tilt.initial_tau = parse_number(ATTR_INITIAL_TAU, &v)?;
        }
        if let Some(v) = get(ATTR_INITIAL_DURATION_MS) {
            let ms = v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{ATTR_INITIAL_DURATION_MS}={v:?}"))?;
            opts.initial_duration = Duration::from_millis(ms);
        }
        opts.tilt.validate()?;
        Ok(opts)
    }
}

fn parse_bool(v: &str) -> Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        // a bare attribute counts as "on"
        "" | "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

fn parse_number(name: &str, v: &str) -> Result<f64> {
    v.trim()
        .parse::<f64>()
        .with_context(|| format!("{name}={v:?}"))
}
