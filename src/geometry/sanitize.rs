use crate::constants::MAX_ANGLE;

/// Clamp an angle in degrees to `[0, MAX_ANGLE]`
///
/// NaN is treated as missing and maps to 0.
pub fn sanitize_angle(angle: f64) -> f64 {
    if angle.is_nan() || angle <= 0.0 {
        return 0.0;
    }
    angle.min(MAX_ANGLE)
}

/// Clamp a distance or width to `[0, ∞)`
///
/// NaN is treated as missing and maps to 0. Positive infinity passes through.
pub fn sanitize_length(length: f64) -> f64 {
    if length.is_nan() || length <= 0.0 {
        0.0
    } else {
        length
    }
}
