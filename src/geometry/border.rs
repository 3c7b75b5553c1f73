use std::f64::consts::{FRAC_PI_2, PI};

use crate::math::Point2;

use super::Canvas;

/// One of the four edges of a [`Canvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Border {
    /// `y = 0`
    Top,
    /// `y = height`
    Bottom,
    /// `x = 0`
    Left,
    /// `x = width`
    Right,
}

impl Border {
    /// All four borders.
    pub const ALL: [Border; 4] = [Border::Top, Border::Bottom, Border::Left, Border::Right];

    /// Perpendicular foot from `point` onto this border's infinite line.
    ///
    /// Returns `(distance, angle)`: the unsigned distance to the line and the
    /// angle pointing from `point` toward it.
    #[must_use]
    pub fn perpendicular(self, canvas: &Canvas, point: &Point2) -> (f64, f64) {
        match self {
            Border::Top => (point.y.abs(), FRAC_PI_2.copysign(point.y)),
            Border::Bottom => {
                let offset = point.y - canvas.height();
                (offset.abs(), FRAC_PI_2.copysign(offset))
            }
            Border::Left => (point.x.abs(), if point.x < 0.0 { 0.0 } else { PI }),
            Border::Right => {
                let offset = canvas.width() - point.x;
                (offset.abs(), if offset > 0.0 { 0.0 } else { PI })
            }
        }
    }

    /// Whether `point` lies on this border's line, within `tolerance`.
    #[must_use]
    pub fn holds(self, canvas: &Canvas, point: &Point2, tolerance: f64) -> bool {
        self.perpendicular(canvas, point).0 <= tolerance
    }
}
