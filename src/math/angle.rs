//! Angle helpers.
//!
//! Canonical angles lie in `[0, 2π)`. Angles are measured above the
//! horizon, so on a y-down canvas an angle `a` points along `(cos a, -sin a)`.
use std::f64::consts::{PI, TAU};

use super::Vector2;

/// Maps any finite angle into `[0, 2π)`.
///
/// Multiples of `2π` map to exactly `0.0`. Non-finite input yields NaN.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle - TAU * (angle / TAU).floor();
    // Tiny negative inputs round up to exactly 2π.
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Unit direction of travel for `angle` in canvas (y-down) coordinates.
#[must_use]
pub fn direction(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), -angle.sin())
}
