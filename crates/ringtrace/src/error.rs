use std::collections::TryReserveError;

use thiserror::Error;

use crate::ring::NodeId;

/// Errors reported by ring traversal, removal and materialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RingError {
    #[error("failed to allocate output buffer: {0}")]
    Alloc(#[from] TryReserveError),

    /// The bounded scan took `max_search` hops without closing the cycle.
    #[error("traversal cap of {max_search} hops exceeded")]
    TraversalCapExceeded { max_search: usize },

    /// A `next` link was missing after `hops` hops: the list is not circular.
    #[error("list is an open chain (broken after {hops} hops)")]
    OpenChain { hops: usize },

    /// `next` and `prev` disagree at this node.
    #[error("links are not mutually inverse at node {at:?}")]
    BrokenLink { at: NodeId },

    #[error("node {0:?} is not part of this ring")]
    StaleNode(NodeId),

    #[error("ring is empty")]
    Empty,
}
