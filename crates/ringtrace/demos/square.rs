//! Compress a traced square and a few random traced contours.
//!
//! Usage:
//!   cargo run -p ringtrace --example square

use ringtrace::prelude::*;

fn main() -> Result<(), RingError> {
    let square = Contour::from_points([(0u32, 0u32), (1, 0), (2, 0), (2, 1), (2, 2), (0, 2)]);
    println!("square: {} traced points", square.len());
    let corners = square.into_points()?;
    println!("square corners: {corners:?}");

    let cfg = TraceCfg::default();
    for index in 0..5 {
        let draw = draw_traced_contour(cfg, ReplayToken { seed: 2025, index });
        let traced = draw.contour.len();
        let pts = draw.contour.into_points()?;
        println!(
            "sample {index}: traced={traced}, corners={}, area={:.1}",
            pts.len(),
            area(&pts)
        );
    }
    Ok(())
}
