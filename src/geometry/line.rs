use std::f64::consts::PI;

use crate::error::{ensure_finite, Result};
use crate::math::{direction, normalize_angle, Point2};

/// An infinite line through `origin`, oriented by a canonical angle.
///
/// "Front" is the direction of travel, "back" the opposite direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedLine {
    origin: Point2,
    angle: f64,
}

impl DirectedLine {
    /// Creates a new directed line. The angle is normalized into `[0, 2π)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the origin or the angle is not finite.
    pub fn new(origin: Point2, angle: f64) -> Result<Self> {
        ensure_finite("origin.x", origin.x)?;
        ensure_finite("origin.y", origin.y)?;
        let angle = ensure_finite("angle", angle)?;
        Ok(Self {
            origin,
            angle: normalize_angle(angle),
        })
    }

    /// Returns the point the line passes through.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the canonical direction angle.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The point `distance` ahead of the origin (behind it when negative).
    #[must_use]
    pub fn point_at(&self, distance: f64) -> Point2 {
        self.origin + direction(self.angle) * distance
    }

    /// The same line travelled in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.origin,
            angle: normalize_angle(self.angle + PI),
        }
    }
}
