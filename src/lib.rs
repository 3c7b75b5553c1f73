//! Exit geometry for strokes drawn on a rectangular canvas.
//!
//! Given a canvas of `width x height` (origin at the top-left corner, y
//! growing downward) this crate answers two questions for a stroke
//! generator:
//!
//! - where does a directed line through a point cross the canvas border,
//!   ahead of and behind the point ([`operations::LineBorderIntersect`]);
//! - how far can a circular arc rotate, in either direction, before it
//!   leaves the canvas ([`operations::ArcBorderIntersect`]).
//!
//! Angles are in radians, measured above the horizon: an angle `a` points
//! along `(cos a, -sin a)` in canvas coordinates.
//! A line at `π/2` therefore travels toward `y = 0` and exits through the
//! top border.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ClipError, Result};
