//! Contour specialization of the generic ring.
//!
//! Purpose
//! - `Contour`: a `Ring<Point>` plus its traversal cap.
//! - Collinearity compression (exact integer cross product) and array
//!   materialization for downstream consumers.
//! - Small helpers around it: traced-contour construction, shape metrics and a
//!   seeded generator for tests and benchmarks.

mod build;
mod compress;
pub mod metrics;
pub mod rand;
mod types;

pub use build::densify;
pub use compress::{Compression, Contour};
pub use metrics::{area, bounds, centroid, signed_area2, Bounds};
pub use types::{cross, is_collinear, Point};

#[cfg(test)]
mod tests;
