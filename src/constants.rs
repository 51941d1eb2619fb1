//! Numeric limits for scan geometry and rate estimation
//!
//! These constants bound every angle-bearing computation and define the
//! extrapolation policy used when a target angle lies outside a scanner's
//! specification table.

/// Domain ceiling for scan angles, in degrees.
/// No conversion or estimate ever reports an angle above this.
pub const MAX_ANGLE: f64 = 90.0;

/// Upper bound on the rate multiplier applied when extrapolating below the
/// smallest specified angle.
pub const MAX_BELOW_RANGE_RATIO: f64 = 1.5;

/// Floor for any computed (non-sentinel) KPPS estimate.
pub const MIN_ESTIMATED_KPPS: f64 = 1.0;
