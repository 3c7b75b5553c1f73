use crate::error::{ensure_finite, GeometryError, Result};
use crate::math::{direction, Point2};

/// A circle on the canvas plane, used as the support of an arc stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// A zero radius is accepted and never reaches any border.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is not finite, or the radius is negative
    /// or not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        ensure_finite("center.x", center.x)?;
        ensure_finite("center.y", center.y)?;
        let radius = ensure_finite("radius", radius)?;
        if radius < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The point on the circle at `angle`, seen from the center.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        self.center + direction(angle) * self.radius
    }
}
