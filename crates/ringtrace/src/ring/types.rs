//! Node handles, scan results and the traversal cap.
//!
//! - `NodeId`: stable index of a node slot inside its owning `Ring`.
//! - `Node<T>`: value plus optional `next`/`prev` links (`None` terminates an open chain).
//! - `ScanCfg`: hop cap applied to every bounded traversal.
//! - `Scan`, `ScanStop`: outcome of `Ring::bounded_scan`.

/// Default hop cap for bounded traversals.
pub const DEFAULT_MAX_SEARCH: usize = 65535;

/// Stable handle to a node slot. Becomes stale once the node is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A doubly-linked element owning its value.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub value: T,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn detached(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }
}

/// Traversal configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanCfg {
    /// Maximum number of `next` hops any single traversal may take.
    pub max_search: usize,
}

impl Default for ScanCfg {
    fn default() -> Self {
        Self {
            max_search: DEFAULT_MAX_SEARCH,
        }
    }
}

/// Why a bounded scan stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStop {
    /// Returned to the start node; `hops` is the cycle length.
    Closed,
    /// Hit a missing `next` link; `end` is the last reachable node.
    OpenEnd,
    /// Took `max_search` hops without closing or terminating.
    Capped,
}

/// Result of `Ring::bounded_scan`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scan {
    pub hops: usize,
    pub end: NodeId,
    pub stop: ScanStop,
}

impl Scan {
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self.stop, ScanStop::Closed)
    }
}
