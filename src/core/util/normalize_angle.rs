use std::f64::consts::{PI, TAU};

/// Wraps an angle in radians into `[-π, π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;

    // rem_euclid can round up to TAU for inputs just below a multiple of it
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}
