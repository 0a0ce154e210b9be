//! Traced-contour simplification.
//!
//! A boundary tracer hands over a closed ring of pixel points; this crate
//! removes every point lying on the straight segment between its neighbours
//! and materializes the surviving corners into a plain vector.
//!
//! Layers
//! - `ring`: generic circular doubly-linked list (`Ring<T>`) with bounded
//!   traversal, skip, removal and array materialization.
//! - `contour`: `Contour` over `Ring<Point>`, exact collinearity compression,
//!   shape metrics and a seeded traced-contour generator.
//!
//! Every traversal is capped (`ScanCfg::max_search`, default 65535 hops); a
//! malformed list surfaces as a `RingError` instead of an endless walk.

pub mod contour;
pub mod error;
pub mod ring;

pub use contour::{Compression, Contour, Point};
pub use error::RingError;
pub use ring::{NodeId, Ring, Scan, ScanCfg, ScanStop};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contour::metrics::{area, bounds, centroid, Bounds};
    pub use crate::contour::rand::{draw_traced_contour, CornerCount, ReplayToken, TraceCfg};
    pub use crate::contour::{Compression, Contour, Point};
    pub use crate::error::RingError;
    pub use crate::ring::{NodeId, Ring, Scan, ScanCfg, ScanStop, DEFAULT_MAX_SEARCH};
    pub use nalgebra::Vector2 as Vec2;
}
