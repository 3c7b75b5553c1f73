use crate::error::{CanvasError, Result};
use crate::math::{Point2, TOLERANCE};

/// An axis-aligned drawing area spanning `[0, width] x [0, height]`.
///
/// The origin is the top-left corner and y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Creates a new canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not finite or not positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        for (dimension, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value < TOLERANCE {
                tracing::debug!(dimension, value, "rejected canvas dimension");
                return Err(CanvasError::InvalidDimension { dimension, value }.into());
            }
        }
        Ok(Self { width, height })
    }

    /// Returns the canvas width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the canvas height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether `point` lies inside the canvas or on its border.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        (-TOLERANCE..=self.width + TOLERANCE).contains(&point.x)
            && (-TOLERANCE..=self.height + TOLERANCE).contains(&point.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ClipError;

    #[test]
    fn new_with_valid_dimensions() {
        let c = Canvas::new(640.0, 480.0).unwrap();
        assert!((c.width() - 640.0).abs() < f64::EPSILON);
        assert!((c.height() - 480.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_area_fails() {
        let err = Canvas::new(100.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ClipError::Canvas(CanvasError::InvalidDimension {
                dimension: "height",
                ..
            })
        ));
    }

    #[test]
    fn negative_width_fails() {
        assert!(Canvas::new(-1.0, 10.0).is_err());
    }

    #[test]
    fn non_finite_fails() {
        assert!(Canvas::new(f64::INFINITY, 10.0).is_err());
        assert!(Canvas::new(10.0, f64::NAN).is_err());
    }

    #[test]
    fn contains_includes_border() {
        let c = Canvas::new(10.0, 20.0).unwrap();
        assert!(c.contains(&Point2::new(5.0, 5.0)));
        assert!(c.contains(&Point2::new(0.0, 20.0)));
        assert!(!c.contains(&Point2::new(10.5, 5.0)));
        assert!(!c.contains(&Point2::new(5.0, -0.5)));
    }
}
