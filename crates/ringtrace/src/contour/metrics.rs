//! Shape measures over a materialized point slice.

use nalgebra::Vector2;

use super::types::Point;

/// Axis-aligned inclusive pixel bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> u32 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> u32 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}

/// Twice the signed shoelace area. Positive for counter-clockwise order in a
/// y-up frame (clockwise on screen, where y grows downward).
pub fn signed_area2(points: &[Point]) -> i128 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x as i128 * q.y as i128 - q.x as i128 * p.y as i128
        })
        .sum()
}

/// Unsigned polygon area.
#[inline]
pub fn area(points: &[Point]) -> f64 {
    signed_area2(points).unsigned_abs() as f64 * 0.5
}

pub fn bounds(points: &[Point]) -> Option<Bounds> {
    let first = *points.first()?;
    Some(points.iter().fold(
        Bounds {
            min: first,
            max: first,
        },
        |b, p| Bounds {
            min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        },
    ))
}

/// Area centroid; falls back to the vertex mean for zero-area input.
pub fn centroid(points: &[Point]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let a2 = signed_area2(points);
    if a2 == 0 {
        let sum = points
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.to_vec2());
        return Some(sum / points.len() as f64);
    }
    let n = points.len();
    let mut c = Vector2::<f64>::zeros();
    for i in 0..n {
        let p = points[i].to_vec2();
        let q = points[(i + 1) % n].to_vec2();
        let cross = p.x * q.y - q.x * p.y;
        c += (p + q) * cross;
    }
    Some(c / (3.0 * a2 as f64))
}
