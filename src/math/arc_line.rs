/// The two angles at which a circle crosses an infinite line.
///
/// Both angles are measured from the circle's center and are symmetric
/// around the angle of the perpendicular foot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCrossing {
    /// `line_angle + acos(dist / radius)`.
    pub plus: f64,
    /// `line_angle - acos(dist / radius)`.
    pub minus: f64,
}

impl ArcCrossing {
    /// Returns `[plus, minus]`.
    #[must_use]
    pub fn angles(&self) -> [f64; 2] {
        [self.plus, self.minus]
    }
}

/// Intersects a circle with an infinite line.
///
/// `dist` is the perpendicular distance from the circle's center to the
/// line and `line_angle` the direction from the center toward the foot of
/// that perpendicular. Returns `None` when `radius <= dist`, tangency
/// included.
#[must_use]
pub fn intersect_arc_with_line(dist: f64, radius: f64, line_angle: f64) -> Option<ArcCrossing> {
    if radius <= dist {
        return None;
    }
    let half_span = (dist / radius).clamp(-1.0, 1.0).acos();
    Some(ArcCrossing {
        plus: line_angle + half_span,
        minus: line_angle - half_span,
    })
}
