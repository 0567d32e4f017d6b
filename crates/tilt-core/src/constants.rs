// Tilt smoothing and parameter mapping constants shared by every host.

// Smoothing time constants (seconds)
pub const STEADY_TAU_SEC: f64 = 0.14; // normal pointer-follow response
pub const INITIAL_TAU_SEC: f64 = 0.6; // slow settle-in right after mount

// Per-axis distance (local px) under which current and target look identical
pub const SETTLE_THRESHOLD_PX: f64 = 0.05;

// Decimal digits kept on every published value
pub const OUTPUT_PRECISION: i32 = 3;

// Pointer percentage range and its centre
pub const PERCENT_MAX: f64 = 100.0;
pub const PERCENT_CENTER: f64 = 50.0;

// Background focal point band (keeps the backdrop subtler than the pointer)
pub const BACKGROUND_MIN: f64 = 35.0;
pub const BACKGROUND_MAX: f64 = 65.0;

// Rotation sensitivity: horizontal tilt is gentler than vertical
pub const ROTATE_X_DIVISOR: f64 = 5.0;
pub const ROTATE_Y_DIVISOR: f64 = 4.0;

// Smallest dimension used when a surface measures zero
pub const MIN_SURFACE_DIMENSION: f64 = 1.0;
