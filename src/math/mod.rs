pub mod angle;
pub mod arc_line;

pub use angle::{deg_to_rad, direction, normalize_angle, rad_to_deg};
pub use arc_line::{intersect_arc_with_line, ArcCrossing};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
