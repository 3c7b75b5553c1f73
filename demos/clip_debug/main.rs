//! Canvas clip debug driver: prints line and arc exit geometry for a canvas.
//!
//! Usage:
//! ```text
//! cargo run --example clip_debug                       # 100 x 100 canvas
//! cargo run --example clip_debug -- 640 480            # custom canvas
//! RUST_LOG=canvas_clip=trace cargo run --example clip_debug
//! ```

use canvas_clip::geometry::Canvas;
use canvas_clip::math::{deg_to_rad, Point2};
use canvas_clip::operations::{intersect_arc_with_borders, intersect_line_with_borders};

fn main() -> canvas_clip::Result<()> {
    // Default: WARN for everything, INFO for this driver and the crate.
    // Override with RUST_LOG env var (e.g. RUST_LOG=canvas_clip=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("clip_debug=info".parse().unwrap_or_default())
        .add_directive("canvas_clip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut dims = std::env::args().skip(1).filter_map(|a| a.parse::<f64>().ok());
    let width = dims.next().unwrap_or(100.0);
    let height = dims.next().unwrap_or(width);
    let canvas = Canvas::new(width, height)?;
    let center = Point2::new(width * 0.5, height * 0.5);

    for deg in (0..360).step_by(45) {
        let r = intersect_line_with_borders(&canvas, center, deg_to_rad(f64::from(deg)))?;
        tracing::info!(
            deg,
            front = %r.front,
            front_border = ?r.front_border,
            front_dist = r.front_dist,
            back = %r.back,
            back_dist = r.back_dist,
            "line"
        );
    }

    let half = width.min(height) * 0.5;
    for radius in [half * 0.5, half, half * 1.2] {
        let span = intersect_arc_with_borders(&canvas, center, radius, 0.0)?;
        tracing::info!(
            radius,
            clockwise = span.clockwise_travel(),
            counter_clockwise = span.counter_clockwise_travel(),
            full_circle = span.is_full_circle(),
            "arc"
        );
    }

    Ok(())
}
