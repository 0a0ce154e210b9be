//! Pixel-space point and the exact collinearity predicate.

use nalgebra::Vector2;

/// Unsigned pixel coordinate. Not validated against any image size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Float vector for downstream geometry.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (u32, u32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// `(b - a) × (c - a)`. Exact: `u32` differences squared fit in `i128`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> i128 {
    let abx = b.x as i128 - a.x as i128;
    let aby = b.y as i128 - a.y as i128;
    let acx = c.x as i128 - a.x as i128;
    let acy = c.y as i128 - a.y as i128;
    abx * acy - aby * acx
}

/// True when `b` lies on the line through `a` and `c` (or `a == c`).
#[inline]
pub fn is_collinear(a: Point, b: Point, c: Point) -> bool {
    cross(a, b, c) == 0
}
