use std::f64::consts::FRAC_PI_2;

use crate::geometry::{Border, Canvas, DirectedLine};
use crate::math::{Point2, TOLERANCE};

/// Where a directed line crosses the canvas border, ahead of and behind its
/// origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection {
    /// Crossing in the direction of travel.
    pub front: Point2,
    /// Distance from the line origin to `front`.
    pub front_dist: f64,
    /// Border that `front` lies on.
    pub front_border: Border,
    /// Crossing opposite to the direction of travel.
    pub back: Point2,
    /// Distance from the line origin to `back`.
    pub back_dist: f64,
    /// Border that `back` lies on.
    pub back_border: Border,
}

impl LineIntersection {
    /// Length of the chord from `back` to `front`.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        (self.front - self.back).norm()
    }
}

/// Candidate crossing of the line with one border's infinite line.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    border: Border,
    point: Point2,
    dist: f64,
}

/// `[front pair, back pair]` for each quadrant of the line angle.
///
/// Within a pair the nearer candidate wins; equal distances pick the second.
const QUADRANT_PAIRS: [[(Border, Border); 2]; 4] = [
    [(Border::Top, Border::Right), (Border::Bottom, Border::Left)],
    [(Border::Top, Border::Left), (Border::Bottom, Border::Right)],
    [(Border::Bottom, Border::Left), (Border::Top, Border::Right)],
    [(Border::Bottom, Border::Right), (Border::Top, Border::Left)],
];

/// `(front, back)` borders for angles `0`, `π/2`, `π` and `3π/2`.
const AXIS_BORDERS: [(Border, Border); 4] = [
    (Border::Right, Border::Left),
    (Border::Top, Border::Bottom),
    (Border::Left, Border::Right),
    (Border::Bottom, Border::Top),
];

/// Intersects a directed line with the four borders of a canvas.
///
/// The origin may lie outside the canvas; the result is then the pair of
/// crossings nearest to it on either side.
pub struct LineBorderIntersect {
    canvas: Canvas,
    line: DirectedLine,
}

impl LineBorderIntersect {
    /// Creates a new `LineBorderIntersect` query.
    #[must_use]
    pub fn new(canvas: &Canvas, line: &DirectedLine) -> Self {
        Self {
            canvas: *canvas,
            line: *line,
        }
    }

    /// Executes the query, returning the front and back crossings.
    #[must_use]
    pub fn execute(&self) -> LineIntersection {
        let angle = self.line.angle();

        let (front, back) = if let Some(quarter) = axis_quarter(angle) {
            let (front, back) = AXIS_BORDERS[quarter];
            tracing::trace!(angle, ?front, ?back, "axis-aligned line");
            (self.perpendicular_crossing(front), self.perpendicular_crossing(back))
        } else {
            let slope = angle.tan();
            let [front, back] = QUADRANT_PAIRS[quadrant(angle)].map(|(first, second)| {
                nearer(
                    self.sloped_crossing(first, slope),
                    self.sloped_crossing(second, slope),
                )
            });
            (front, back)
        };

        LineIntersection {
            front: front.point,
            front_dist: front.dist,
            front_border: front.border,
            back: back.point,
            back_dist: back.dist,
            back_border: back.border,
        }
    }

    /// Crossing with `border` for a line of finite, non-zero `slope`.
    fn sloped_crossing(&self, border: Border, slope: f64) -> Candidate {
        let origin = self.line.origin();
        let (x, y) = (origin.x, origin.y);
        let (width, height) = (self.canvas.width(), self.canvas.height());

        let point = match border {
            Border::Right => Point2::new(width, y - (width - x) * slope),
            Border::Left => Point2::new(0.0, y + x * slope),
            Border::Bottom => Point2::new(x + (y - height) / slope, height),
            Border::Top => Point2::new(x + y / slope, 0.0),
        };
        self.candidate(border, point)
    }

    /// Crossing with `border` for a line perpendicular to it.
    fn perpendicular_crossing(&self, border: Border) -> Candidate {
        let origin = self.line.origin();
        let point = match border {
            Border::Right => Point2::new(self.canvas.width(), origin.y),
            Border::Left => Point2::new(0.0, origin.y),
            Border::Bottom => Point2::new(origin.x, self.canvas.height()),
            Border::Top => Point2::new(origin.x, 0.0),
        };
        self.candidate(border, point)
    }

    fn candidate(&self, border: Border, point: Point2) -> Candidate {
        Candidate {
            border,
            point,
            dist: (point - *self.line.origin()).norm(),
        }
    }
}

fn nearer(first: Candidate, second: Candidate) -> Candidate {
    if first.dist < second.dist {
        first
    } else {
        second
    }
}

/// Quadrant index `0..=3` of a canonical angle.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quadrant(angle: f64) -> usize {
    ((angle / FRAC_PI_2) as usize).min(3)
}

/// Index of the axis direction `angle` lies on, if any.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_quarter(angle: f64) -> Option<usize> {
    let quarters = (angle / FRAC_PI_2).round();
    if (angle - quarters * FRAC_PI_2).abs() <= TOLERANCE {
        Some(quarters as usize % 4)
    } else {
        None
    }
}
