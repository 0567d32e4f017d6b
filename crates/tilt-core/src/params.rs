//! Renderer-facing values derived from a smoothed pointer position.
//!
//! Everything here is a pure function of `(position, surface size)`. The
//! result is rounded to [`OUTPUT_PRECISION`] digits so identical inputs
//! always publish identical strings and the renderer sees no sub-pixel churn.

use crate::constants::{
    BACKGROUND_MAX, BACKGROUND_MIN, MIN_SURFACE_DIMENSION, OUTPUT_PRECISION, PERCENT_CENTER,
    PERCENT_MAX, ROTATE_X_DIVISOR, ROTATE_Y_DIVISOR,
};
use glam::DVec2;

pub const POINTER_X: &str = "--pointer-x";
pub const POINTER_Y: &str = "--pointer-y";
pub const BACKGROUND_X: &str = "--background-x";
pub const BACKGROUND_Y: &str = "--background-y";
pub const POINTER_FROM_CENTER: &str = "--pointer-from-center";
pub const POINTER_FROM_TOP: &str = "--pointer-from-top";
pub const POINTER_FROM_LEFT: &str = "--pointer-from-left";
pub const ROTATE_X: &str = "--rotate-x";
pub const ROTATE_Y: &str = "--rotate-y";

/// One frame's worth of published values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltParams {
    /// Pointer position as a percentage of width, in \[0, 100\].
    pub pointer_x: f64,
    /// Pointer position as a percentage of height, in \[0, 100\].
    pub pointer_y: f64,
    /// Background focal point, in \[35, 65\].
    pub background_x: f64,
    pub background_y: f64,
    /// Distance from the centre, in \[0, 1\].
    pub pointer_from_center: f64,
    /// Fractions in \[0, 1\].
    pub pointer_from_top: f64,
    pub pointer_from_left: f64,
    /// Degrees.
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Default for TiltParams {
    /// Neutral, centred card.
    fn default() -> Self {
        Self::from_percent(PERCENT_CENTER, PERCENT_CENTER)
    }
}

impl TiltParams {
    /// Derive parameters for a local pixel position on a surface of `size`.
    ///
    /// Zero (or negative) dimensions are treated as [`MIN_SURFACE_DIMENSION`]
    /// so the result is always finite for finite input.
    pub fn from_position(position: DVec2, size: DVec2) -> Self {
        let width = positive_or_min(size.x);
        let height = positive_or_min(size.y);
        let percent_x = clamp((PERCENT_MAX / width) * position.x, 0.0, PERCENT_MAX);
        let percent_y = clamp((PERCENT_MAX / height) * position.y, 0.0, PERCENT_MAX);
        Self::from_percent(percent_x, percent_y)
    }

    fn from_percent(percent_x: f64, percent_y: f64) -> Self {
        let center_x = percent_x - PERCENT_CENTER;
        let center_y = percent_y - PERCENT_CENTER;
        Self {
            pointer_x: round(percent_x),
            pointer_y: round(percent_y),
            background_x: remap(percent_x, 0.0, PERCENT_MAX, BACKGROUND_MIN, BACKGROUND_MAX),
            background_y: remap(percent_y, 0.0, PERCENT_MAX, BACKGROUND_MIN, BACKGROUND_MAX),
            pointer_from_center: round(clamp(center_x.hypot(center_y) / PERCENT_CENTER, 0.0, 1.0)),
            pointer_from_top: round(percent_y / PERCENT_MAX),
            pointer_from_left: round(percent_x / PERCENT_MAX),
            rotate_x: round(-(center_x / ROTATE_X_DIVISOR)),
            rotate_y: round(center_y / ROTATE_Y_DIVISOR),
        }
    }

    /// CSS custom properties in a fixed order, values formatted with their unit.
    pub fn css_properties(&self) -> [(&'static str, String); 9] {
        [
            (POINTER_X, format!("{}%", self.pointer_x)),
            (POINTER_Y, format!("{}%", self.pointer_y)),
            (BACKGROUND_X, format!("{}%", self.background_x)),
            (BACKGROUND_Y, format!("{}%", self.background_y)),
            (POINTER_FROM_CENTER, format!("{}", self.pointer_from_center)),
            (POINTER_FROM_TOP, format!("{}", self.pointer_from_top)),
            (POINTER_FROM_LEFT, format!("{}", self.pointer_from_left)),
            (ROTATE_X, format!("{}deg", self.rotate_x)),
            (ROTATE_Y, format!("{}deg", self.rotate_y)),
        ]
    }

    pub fn is_finite(&self) -> bool {
        [
            self.pointer_x,
            self.pointer_y,
            self.background_x,
            self.background_y,
            self.pointer_from_center,
            self.pointer_from_top,
            self.pointer_from_left,
            self.rotate_x,
            self.rotate_y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[inline]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    // NaN collapses to `min` rather than propagating into the stylesheet
    v.max(min).min(max)
}

/// Round to [`OUTPUT_PRECISION`] decimal digits; `-0` becomes `0`.
#[inline]
pub fn round(v: f64) -> f64 {
    let scale = 10f64.powi(OUTPUT_PRECISION);
    (v * scale).round() / scale + 0.0
}

/// Linearly map `v` from `[from_min, from_max]` onto `[to_min, to_max]`, rounded.
#[inline]
pub fn remap(v: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    round(to_min + ((to_max - to_min) * (v - from_min)) / (from_max - from_min))
}

#[inline]
fn positive_or_min(dimension: f64) -> f64 {
    if dimension > 0.0 {
        dimension
    } else {
        MIN_SURFACE_DIMENSION
    }
}
