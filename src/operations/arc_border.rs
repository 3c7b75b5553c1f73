use std::f64::consts::TAU;

use crate::error::{ensure_finite, Result};
use crate::geometry::{Border, Canvas, Circle};
use crate::math::{intersect_arc_with_line, normalize_angle};

/// How far an arc may rotate from its start angle before crossing a border.
///
/// `clockwise_limit` is the smallest crossing angle relative to the start,
/// in `[0, 2π)`. `counter_clockwise_limit` is the largest one minus `2π`,
/// in `[-2π, 0)`. When no border is ever crossed the span is
/// [`ArcBorderSpan::FULL_CIRCLE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcBorderSpan {
    pub clockwise_limit: f64,
    pub counter_clockwise_limit: f64,
}

impl ArcBorderSpan {
    /// Sentinel for an arc that can rotate freely in either direction.
    pub const FULL_CIRCLE: Self = Self {
        clockwise_limit: -TAU,
        counter_clockwise_limit: TAU,
    };

    /// Whether this is the [`ArcBorderSpan::FULL_CIRCLE`] sentinel.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        *self == Self::FULL_CIRCLE
    }

    /// Non-negative angle the arc can travel clockwise.
    #[must_use]
    pub fn clockwise_travel(&self) -> f64 {
        if self.is_full_circle() {
            TAU
        } else {
            self.clockwise_limit
        }
    }

    /// Non-negative angle the arc can travel counter-clockwise.
    #[must_use]
    pub fn counter_clockwise_travel(&self) -> f64 {
        if self.is_full_circle() {
            TAU
        } else {
            -self.counter_clockwise_limit
        }
    }
}

/// Intersects a circle with the four border lines of a canvas.
///
/// Borders are treated as infinite lines, so a circle outside the canvas
/// still crosses a border whose extension it reaches.
pub struct ArcBorderIntersect {
    canvas: Canvas,
    circle: Circle,
    start_angle: f64,
}

impl ArcBorderIntersect {
    /// Creates a new `ArcBorderIntersect` query for an arc starting at
    /// `start_angle` on `circle`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_angle` is not finite.
    pub fn new(canvas: &Canvas, circle: &Circle, start_angle: f64) -> Result<Self> {
        Ok(Self {
            canvas: *canvas,
            circle: *circle,
            start_angle: ensure_finite("start_angle", start_angle)?,
        })
    }

    /// All angles at which the circle crosses a border line, canonical and
    /// ascending. Holds 0, 2, 4, 6 or 8 entries.
    #[must_use]
    pub fn crossing_angles(&self) -> Vec<f64> {
        let mut angles: Vec<f64> = self
            .raw_crossings()
            .into_iter()
            .map(normalize_angle)
            .collect();
        angles.sort_by(f64::total_cmp);
        angles
    }

    /// Executes the query, returning the rotation span relative to the start
    /// angle.
    #[must_use]
    pub fn execute(&self) -> ArcBorderSpan {
        let mut relative: Vec<f64> = self
            .raw_crossings()
            .into_iter()
            .map(|angle| normalize_angle(angle - self.start_angle))
            .collect();
        relative.sort_by(f64::total_cmp);

        let (Some(&first), Some(&last)) = (relative.first(), relative.last()) else {
            tracing::debug!(
                radius = self.circle.radius(),
                "arc never crosses a border"
            );
            return ArcBorderSpan::FULL_CIRCLE;
        };
        tracing::trace!(crossings = relative.len(), first, last, "arc border span");

        ArcBorderSpan {
            clockwise_limit: first,
            counter_clockwise_limit: last - TAU,
        }
    }

    /// Crossing angles as produced per border, before normalization.
    fn raw_crossings(&self) -> Vec<f64> {
        let center = self.circle.center();
        Border::ALL
            .iter()
            .filter_map(|border| {
                let (dist, toward) = border.perpendicular(&self.canvas, center);
                intersect_arc_with_line(dist, self.circle.radius(), toward)
            })
            .flat_map(|crossing| crossing.angles())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    fn query(cx: f64, cy: f64, radius: f64, start_angle: f64) -> ArcBorderIntersect {
        let canvas = Canvas::new(100.0, 100.0).unwrap();
        let circle = Circle::new(Point2::new(cx, cy), radius).unwrap();
        ArcBorderIntersect::new(&canvas, &circle, start_angle).unwrap()
    }

    #[test]
    fn small_circle_rotates_freely() {
        let span = query(50.0, 50.0, 1.0, 0.0).execute();
        assert!(span.is_full_circle());
        assert_relative_eq!(span.clockwise_limit, -TAU);
        assert_relative_eq!(span.counter_clockwise_limit, TAU);
        assert_relative_eq!(span.clockwise_travel(), TAU);
        assert_relative_eq!(span.counter_clockwise_travel(), TAU);
    }

    #[test]
    fn far_outside_circle_rotates_freely() {
        assert!(query(-50.0, -50.0, 10.0, 1.0).execute().is_full_circle());
    }

    #[test]
    fn tangent_circle_rotates_freely() {
        assert!(query(50.0, 50.0, 50.0, 0.0).execute().is_full_circle());
    }

    #[test]
    fn single_border_crossing() {
        // Right border is 10 away with radius 20: crossings at ±π/3.
        let q = query(90.0, 50.0, 20.0, PI);
        let angles = q.crossing_angles();
        assert_eq!(angles.len(), 2);
        assert_relative_eq!(angles[0], FRAC_PI_3, epsilon = 1e-10);
        assert_relative_eq!(angles[1], TAU - FRAC_PI_3, epsilon = 1e-10);

        let span = q.execute();
        assert_relative_eq!(span.clockwise_limit, 2.0 * FRAC_PI_3, epsilon = 1e-10);
        assert_relative_eq!(span.counter_clockwise_limit, -2.0 * FRAC_PI_3, epsilon = 1e-10);
        assert_relative_eq!(span.counter_clockwise_travel(), 2.0 * FRAC_PI_3, epsilon = 1e-10);
    }

    #[test]
    fn large_circle_crosses_every_border() {
        let q = query(50.0, 50.0, 60.0, 0.0);
        assert_eq!(q.crossing_angles().len(), 8);

        let half = (50.0_f64 / 60.0).acos();
        let span = q.execute();
        assert_relative_eq!(span.clockwise_limit, half, epsilon = 1e-10);
        assert_relative_eq!(span.counter_clockwise_limit, -half, epsilon = 1e-10);
    }

    #[test]
    fn start_facing_top_border() {
        let half = (50.0_f64 / 60.0).acos();
        let span = query(50.0, 50.0, 60.0, FRAC_PI_2).execute();
        assert_relative_eq!(span.clockwise_limit, half, epsilon = 1e-10);
        assert_relative_eq!(span.counter_clockwise_limit, -half, epsilon = 1e-10);
    }

    #[test]
    fn limits_have_expected_signs() {
        for start in [0.0, 0.7, 2.0, 4.5, -3.0] {
            let span = query(20.0, 35.0, 40.0, start).execute();
            assert!((0.0..TAU).contains(&span.clockwise_limit), "start={start}");
            assert!((-TAU..=0.0).contains(&span.counter_clockwise_limit), "start={start}");
        }
    }

    #[test]
    fn limits_rotate_with_start() {
        let crossings = query(20.0, 35.0, 40.0, 0.0).crossing_angles();
        let is_crossing = |angle: f64| {
            crossings
                .iter()
                .any(|&c| (c - angle).abs() < 1e-9 || (c - angle).abs() > TAU - 1e-9)
        };

        for start in [0.0, 1.3, 2.5, 4.0, -2.2] {
            let span = query(20.0, 35.0, 40.0, start).execute();
            let clockwise = normalize_angle(start + span.clockwise_limit);
            let counter = normalize_angle(start + span.counter_clockwise_limit + TAU);
            assert!(is_crossing(clockwise), "start={start} clockwise={clockwise}");
            assert!(is_crossing(counter), "start={start} counter={counter}");
        }
    }

    #[test]
    fn non_finite_start_fails() {
        let canvas = Canvas::new(10.0, 10.0).unwrap();
        let circle = Circle::new(Point2::new(5.0, 5.0), 1.0).unwrap();
        assert!(ArcBorderIntersect::new(&canvas, &circle, f64::NAN).is_err());
    }
}
