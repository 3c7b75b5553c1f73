mod arc_border;
mod line_border;

pub use arc_border::{ArcBorderIntersect, ArcBorderSpan};
pub use line_border::{LineBorderIntersect, LineIntersection};

pub use crate::math::intersect_arc_with_line;

use crate::error::Result;
use crate::geometry::{Canvas, Circle, DirectedLine};
use crate::math::Point2;

/// Front and back border crossings of the line through `origin` at `angle`.
///
/// # Errors
///
/// Returns an error if `origin` or `angle` is not finite.
pub fn intersect_line_with_borders(
    canvas: &Canvas,
    origin: Point2,
    angle: f64,
) -> Result<LineIntersection> {
    let line = DirectedLine::new(origin, angle)?;
    Ok(LineBorderIntersect::new(canvas, &line).execute())
}

/// Rotation span of an arc on the circle `(center, radius)` starting at
/// `start_angle`.
///
/// # Errors
///
/// Returns an error if the circle is invalid or `start_angle` is not finite.
pub fn intersect_arc_with_borders(
    canvas: &Canvas,
    center: Point2,
    radius: f64,
    start_angle: f64,
) -> Result<ArcBorderSpan> {
    let circle = Circle::new(center, radius)?;
    Ok(ArcBorderIntersect::new(canvas, &circle, start_angle)?.execute())
}
