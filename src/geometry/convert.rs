//! Scan cone geometry
//!
//! The projection cone is modelled as an isosceles triangle with the scanner
//! at the apex: `width = 2 * distance * tan(angle / 2)`. Angles are full scan
//! angles in degrees; distance and width share whatever unit the caller uses.

use super::sanitize::{sanitize_angle, sanitize_length};
use crate::constants::MAX_ANGLE;

/// Tangent of half the (already sanitized) scan angle
fn half_angle_tan(safe_angle: f64) -> f64 {
    (safe_angle / 2.0).to_radians().tan()
}

/// Projection width at `distance` for a scan angle in degrees
pub fn convert_to_width(angle: f64, distance: f64) -> f64 {
    let safe_angle = sanitize_angle(angle);
    let safe_distance = sanitize_length(distance);

    if safe_angle == 0.0 || safe_distance == 0.0 {
        return 0.0;
    }

    safe_distance * half_angle_tan(safe_angle) * 2.0
}

/// Distance at which a scan angle in degrees covers `width`
///
/// A zero scan angle never covers a positive width; the result is then
/// `f64::INFINITY`. Zero width is always reached at distance 0.
pub fn convert_to_distance(angle: f64, width: f64) -> f64 {
    let safe_angle = sanitize_angle(angle);
    let safe_width = sanitize_length(width);

    if safe_width == 0.0 {
        return 0.0;
    }
    if safe_angle == 0.0 {
        return f64::INFINITY;
    }

    safe_width / (2.0 * half_angle_tan(safe_angle))
}

/// Scan angle in degrees needed to cover `width` at `distance`, capped at [`MAX_ANGLE`]
///
/// Zero distance with a positive width reports the ceiling.
pub fn convert_to_angle(distance: f64, width: f64) -> f64 {
    let safe_distance = sanitize_length(distance);
    let safe_width = sanitize_length(width);

    if safe_width == 0.0 {
        return 0.0;
    }
    if safe_distance == 0.0 {
        return MAX_ANGLE;
    }

    let ratio = safe_width / (2.0 * safe_distance);
    if ratio.is_nan() {
        // both infinite
        return 0.0;
    }

    let raw = 2.0 * ratio.atan().to_degrees();
    raw.min(MAX_ANGLE)
}
