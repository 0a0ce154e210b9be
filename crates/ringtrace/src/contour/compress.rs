//! Contour ring and the collinearity-compression pass.
//!
//! Window model
//! - Three consecutive nodes A, B, C. If B lies on line AC it is removed and
//!   the window closes up (A stays, B ← C, C ← C.next); otherwise the window
//!   advances one node.
//! - The pass ends after a full lap of non-collinear tests (one per remaining
//!   node) or when fewer than three nodes are left. A full clean lap means no
//!   reducible triple remains anywhere, independent of the seed node.

use tracing::debug;

use super::types::{is_collinear, Point};
use crate::error::RingError;
use crate::ring::{NodeId, Ring, ScanCfg};

/// A traced contour: a ring of pixel points plus its traversal cap.
#[derive(Clone, Debug, Default)]
pub struct Contour {
    pub ring: Ring<Point>,
    pub cfg: ScanCfg,
}

/// Outcome of one compression pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compression {
    pub removed: usize,
    pub remaining: usize,
}

impl Contour {
    pub fn new(ring: Ring<Point>) -> Self {
        Self {
            ring,
            cfg: ScanCfg::default(),
        }
    }

    pub fn from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::new(Ring::from_values(points.into_iter().map(Into::into)))
    }

    #[inline]
    pub fn with_cfg(mut self, cfg: ScanCfg) -> Self {
        self.cfg = cfg;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    #[inline]
    fn point(&self, id: NodeId) -> Result<Point, RingError> {
        self.ring.get(id).copied().ok_or(RingError::StaleNode(id))
    }

    #[inline]
    fn step(&self, id: NodeId, hops: usize) -> Result<NodeId, RingError> {
        self.ring.next(id).ok_or(RingError::OpenChain { hops })
    }

    /// Remove every node that is collinear with its two neighbours.
    ///
    /// Idempotent. Lists with fewer than three nodes are left untouched, and an
    /// already-rectified list is only read. The ring is validated with a
    /// bounded scan first (closed cycle, `prev` mirroring `next`), so a
    /// malformed list is reported before any node is touched.
    pub fn compress(&mut self) -> Result<Compression, RingError> {
        let Some(seed) = self.ring.head() else {
            return Ok(Compression {
                removed: 0,
                remaining: 0,
            });
        };
        let mut n = self.ring.verify_links(seed, self.cfg.max_search)?;
        let mut removed = 0usize;
        if n < 3 {
            return Ok(Compression {
                removed,
                remaining: n,
            });
        }

        let mut a = seed;
        let mut b = self.step(a, n)?;
        let mut c = self.step(b, n)?;
        let mut clean = 0usize;
        while n >= 3 && clean < n {
            if is_collinear(self.point(a)?, self.point(b)?, self.point(c)?) {
                self.ring.remove(b)?;
                n -= 1;
                removed += 1;
                clean = 0;
                b = c;
            } else {
                clean += 1;
                a = b;
                b = c;
            }
            c = self.step(c, n)?;
        }
        debug!(removed, remaining = n, "contour_compress");
        Ok(Compression {
            removed,
            remaining: n,
        })
    }

    /// Compress, then copy the surviving points into an exactly-sized vector.
    ///
    /// Points run from the node after the head around to the head.
    pub fn to_array(&mut self) -> Result<Vec<Point>, RingError> {
        self.compress()?;
        let head = self.ring.head().ok_or(RingError::Empty)?;
        let points = self.ring.to_array(head, &self.cfg)?;
        debug!(count = points.len(), "contour_to_array");
        Ok(points)
    }

    /// Consuming form of `to_array`: the ring is dropped afterwards.
    pub fn into_points(mut self) -> Result<Vec<Point>, RingError> {
        self.to_array()
    }

    /// Current points starting at the head, without compressing.
    pub fn points(&self) -> Result<Vec<Point>, RingError> {
        let head = self.ring.head().ok_or(RingError::Empty)?;
        let n = self.ring.closed_len(head, self.cfg.max_search)?;
        Ok(self
            .ring
            .iter_from(head, n)
            .map(|(_, p)| *p)
            .collect())
    }
}
