//! Traced-contour constructors.
//!
//! A traced boundary visits every lattice point along each edge. These helpers
//! expand a corner list into that dense form, which is what a boundary tracer
//! hands to `Contour::compress`.

use super::compress::Contour;
use super::types::Point;

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Expand a closed corner polygon into every lattice point on its edges.
///
/// Each edge `p → q` contributes `p` and the points strictly between `p` and
/// `q`; `q` is emitted by the following edge. Repeated corners contribute
/// nothing.
pub fn densify(corners: &[Point]) -> Vec<Point> {
    if corners.len() < 2 {
        return corners.to_vec();
    }
    let mut out = Vec::new();
    for (k, &p) in corners.iter().enumerate() {
        let q = corners[(k + 1) % corners.len()];
        let dx = q.x as i64 - p.x as i64;
        let dy = q.y as i64 - p.y as i64;
        let g = gcd(dx.unsigned_abs(), dy.unsigned_abs()) as i64;
        if g == 0 {
            continue;
        }
        let (sx, sy) = (dx / g, dy / g);
        for i in 0..g {
            out.push(Point::new(
                (p.x as i64 + i * sx) as u32,
                (p.y as i64 + i * sy) as u32,
            ));
        }
    }
    if out.is_empty() {
        out.push(corners[0]);
    }
    out
}

impl Contour {
    /// Dense contour through the given corners.
    pub fn traced(corners: &[Point]) -> Self {
        Contour::from_points(densify(corners))
    }

    /// Every boundary pixel of the `w × h` rectangle at `(x0, y0)`, clockwise
    /// in image coordinates starting at the top-left pixel. The far edges are
    /// clamped to `u32::MAX`.
    pub fn rect_boundary(x0: u32, y0: u32, w: u32, h: u32) -> Self {
        let x1 = x0.saturating_add(w.max(1) - 1);
        let y1 = y0.saturating_add(h.max(1) - 1);
        let mut corners = vec![Point::new(x0, y0)];
        for p in [Point::new(x1, y0), Point::new(x1, y1), Point::new(x0, y1)] {
            if !corners.contains(&p) {
                corners.push(p);
            }
        }
        Contour::traced(&corners)
    }
}
