//! Random traced contours (star-shaped lattice polygons, densified).
//!
//! Model
//! - Place `n` corners at jittered, sorted angles around the centre of an
//!   `extent × extent` box with jittered radii, round them to the pixel
//!   lattice, then densify every edge with all lattice points on it.
//! - The result looks like a boundary tracer's output: long runs of collinear
//!   pixels separated by a known set of corners.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::build::densify;
use super::compress::Contour;
use super::types::Point;

/// Corner count distribution.
#[derive(Clone, Copy, Debug)]
pub enum CornerCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl CornerCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            CornerCount::Fixed(n) => n.max(3),
            CornerCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TraceCfg {
    pub corners: CornerCount,
    /// Side of the square pixel box the contour fits in.
    pub extent: u32,
    /// Angular jitter as a fraction of the base spacing. Clamped to [0, 0.45].
    pub angle_jitter_frac: f64,
    /// Relative radial jitter. Clamped to [0, 0.5].
    pub radial_jitter: f64,
}

impl Default for TraceCfg {
    fn default() -> Self {
        Self {
            corners: CornerCount::Uniform { min: 3, max: 12 },
            extent: 256,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// A drawn contour together with the corners it was densified from.
#[derive(Clone, Debug)]
pub struct TracedDraw {
    pub corners: Vec<Point>,
    pub contour: Contour,
}

/// Draw one traced contour. Corners that round onto the previous one are dropped.
pub fn draw_traced_contour(cfg: TraceCfg, tok: ReplayToken) -> TracedDraw {
    let mut rng = tok.to_std_rng();
    let n = cfg.corners.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.45);
    let rj = cfg.radial_jitter.clamp(0.0, 0.5);
    let half = (cfg.extent.max(8) / 2) as f64;
    let r0 = half / (1.0 + rj);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;

    let mut corners: Vec<Point> = Vec::with_capacity(n);
    for k in 0..n {
        let th = phase + (k as f64 + (rng.gen::<f64>() * 2.0 - 1.0) * aj) * delta;
        let r = r0 * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
        let x = (half + r * th.cos()).round().max(0.0) as u32;
        let y = (half + r * th.sin()).round().max(0.0) as u32;
        let p = Point::new(x, y);
        if corners.last() != Some(&p) {
            corners.push(p);
        }
    }
    while corners.len() > 1 && corners.first() == corners.last() {
        corners.pop();
    }
    let contour = Contour::from_points(densify(&corners));
    TracedDraw { corners, contour }
}
