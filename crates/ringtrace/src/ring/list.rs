//! Arena-backed circular doubly-linked list.
//!
//! Nodes live in a slot vector and link to each other through `NodeId`
//! indices. Removing a node empties its slot, so a stale id can never reach
//! freed storage: every accessor treats it as absent.
//!
//! Invariants (well-formed ring):
//! - `next(a) == Some(b)` iff `prev(b) == Some(a)`.
//! - Following `next` from any node returns to it after `len()` hops.
//! - A single node links to itself in both directions.

use tracing::trace;

use super::types::{Node, NodeId, Scan, ScanCfg, ScanStop};
use crate::error::RingError;

/// Circular doubly-linked list over values of type `T`.
#[derive(Clone, Debug)]
pub struct Ring<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    len: usize,
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ring<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// One node whose `next` and `prev` point to itself.
    pub fn singleton(value: T) -> Self {
        let mut ring = Self::new();
        ring.push_back(value);
        ring
    }

    /// Build a ring in iteration order; the first value becomes the head.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let values = values.into_iter();
        let mut ring = Self::new();
        ring.slots.reserve(values.size_hint().0);
        for v in values {
            ring.push_back(v);
        }
        ring
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn set_head(&mut self, id: NodeId) -> Result<(), RingError> {
        if !self.contains(id) {
            return Err(RingError::StaleNode(id));
        }
        self.head = Some(id);
        Ok(())
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0)?.as_ref()
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|n| &n.value)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|n| &mut n.value)
    }

    /// Successor of `id`. `None` at the end of an open chain, or if either
    /// node is no longer live.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.next.filter(|n| self.contains(*n))
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.prev.filter(|p| self.contains(*p))
    }

    fn alloc(&mut self, value: T) -> NodeId {
        let node = Some(Node::detached(value));
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = node;
                NodeId(slot)
            }
            None => {
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(n) = self.node_mut(id) {
            n.next = next;
        }
    }

    pub(crate) fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(n) = self.node_mut(id) {
            n.prev = prev;
        }
    }

    #[inline]
    fn link(&mut self, a: NodeId, b: NodeId) {
        self.set_next(a, Some(b));
        self.set_prev(b, Some(a));
    }

    /// Append `value` just before the head (i.e. at the end of the cycle).
    pub fn push_back(&mut self, value: T) -> NodeId {
        match self.head {
            Some(head) if self.contains(head) => {
                let tail = self.prev(head);
                let id = self.alloc(value);
                if let Some(tail) = tail {
                    self.link(tail, id);
                }
                self.link(id, head);
                id
            }
            _ => {
                let id = self.alloc(value);
                self.link(id, id);
                self.head = Some(id);
                id
            }
        }
    }

    /// Insert a new node immediately after `at`.
    pub fn insert_after(&mut self, at: NodeId, value: T) -> Result<NodeId, RingError> {
        if !self.contains(at) {
            return Err(RingError::StaleNode(at));
        }
        let after = self.next(at);
        let id = self.alloc(value);
        self.link(at, id);
        if let Some(after) = after {
            self.link(id, after);
        }
        Ok(id)
    }

    /// Insert a new node immediately before `at`.
    pub fn insert_before(&mut self, at: NodeId, value: T) -> Result<NodeId, RingError> {
        if !self.contains(at) {
            return Err(RingError::StaleNode(at));
        }
        let before = self.prev(at);
        let id = self.alloc(value);
        if let Some(before) = before {
            self.link(before, id);
        }
        self.link(id, at);
        Ok(id)
    }

    /// Unlink `id`, free its slot and hand back its value.
    ///
    /// Neighbours are joined directly. On an open chain, the surviving
    /// neighbour's link toward `id` is cleared. Removing the last node leaves
    /// an empty ring with no head.
    pub fn remove(&mut self, id: NodeId) -> Result<T, RingError> {
        let node = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(RingError::StaleNode(id))?;
        self.free.push(id.0);
        self.len -= 1;

        // The slot is already vacated, so a self-link filters out here.
        let prev = node.prev.filter(|p| self.contains(*p));
        let next = node.next.filter(|n| self.contains(*n));
        match (prev, next) {
            (Some(p), Some(n)) => self.link(p, n),
            (Some(p), None) => self.set_next(p, None),
            (None, Some(n)) => self.set_prev(n, None),
            (None, None) => {}
        }
        if self.head == Some(id) {
            self.head = next.or(prev);
        }
        trace!(node = id.0, remaining = self.len, "ring_remove");
        Ok(node.value)
    }

    /// Break the link leaving `id`, turning a ring into an open chain that
    /// ends at `id`. Returns the former successor, now the chain's first node.
    pub fn cut_after(&mut self, id: NodeId) -> Result<Option<NodeId>, RingError> {
        if !self.contains(id) {
            return Err(RingError::StaleNode(id));
        }
        let after = self.next(id);
        self.set_next(id, None);
        if let Some(after) = after {
            self.set_prev(after, None);
        }
        Ok(after)
    }

    /// Follow `next` `n` times, stopping early at a missing link.
    pub fn skip(&self, id: NodeId, n: usize) -> NodeId {
        let mut cur = id;
        for _ in 0..n {
            match self.next(cur) {
                Some(nx) => cur = nx,
                None => break,
            }
        }
        cur
    }

    /// Mirror of `skip` along `prev`.
    pub fn skip_backwards(&self, id: NodeId, n: usize) -> NodeId {
        let mut cur = id;
        for _ in 0..n {
            match self.prev(cur) {
                Some(pv) => cur = pv,
                None => break,
            }
        }
        cur
    }

    /// Walk `next` from `start` until the cycle closes, a link is missing, or
    /// `max_search` hops have been taken. Never takes more than `max_search` hops.
    pub fn bounded_scan(&self, start: NodeId, max_search: usize) -> Result<Scan, RingError> {
        if !self.contains(start) {
            return Err(RingError::StaleNode(start));
        }
        let mut cur = start;
        let mut hops = 0usize;
        let stop = loop {
            let Some(nx) = self.next(cur) else {
                break ScanStop::OpenEnd;
            };
            if hops == max_search {
                break ScanStop::Capped;
            }
            hops += 1;
            cur = nx;
            if nx == start {
                break ScanStop::Closed;
            }
        };
        trace!(start = start.0, hops, ?stop, "bounded_scan");
        Ok(Scan {
            hops,
            end: cur,
            stop,
        })
    }

    /// Cycle length through `start`, or the error describing why the walk did
    /// not close within `max_search` hops.
    pub fn closed_len(&self, start: NodeId, max_search: usize) -> Result<usize, RingError> {
        let scan = self.bounded_scan(start, max_search)?;
        match scan.stop {
            ScanStop::Closed => Ok(scan.hops),
            ScanStop::OpenEnd => Err(RingError::OpenChain { hops: scan.hops }),
            ScanStop::Capped => Err(RingError::TraversalCapExceeded { max_search }),
        }
    }

    /// Like `closed_len`, but also checks that every `next` hop is mirrored by `prev`.
    pub fn verify_links(&self, start: NodeId, max_search: usize) -> Result<usize, RingError> {
        let n = self.closed_len(start, max_search)?;
        let mut cur = start;
        for _ in 0..n {
            let nx = self.next(cur).ok_or(RingError::OpenChain { hops: n })?;
            if self.prev(nx) != Some(cur) {
                return Err(RingError::BrokenLink { at: nx });
            }
            cur = nx;
        }
        Ok(n)
    }

    /// Iterate `(id, value)` starting at `start`, for at most `max_search` items.
    pub fn iter_from(&self, start: NodeId, max_search: usize) -> Iter<'_, T> {
        Iter {
            ring: self,
            start,
            cur: self.contains(start).then_some(start),
            remaining: max_search,
        }
    }
}

impl<T: Clone> Ring<T> {
    /// Copy `hops` values following `start`, in `next` order.
    fn copy_after(&self, start: NodeId, hops: usize) -> Result<Vec<T>, RingError> {
        let mut out = Vec::new();
        out.try_reserve_exact(hops)?;
        let mut cur = start;
        for _ in 0..hops {
            let Some(nx) = self.next(cur) else {
                break;
            };
            cur = nx;
            if let Some(v) = self.get(cur) {
                out.push(v.clone());
            }
        }
        debug_assert_eq!(out.len(), hops);
        Ok(out)
    }

    /// Bounded copy that accepts truncation: the returned values always
    /// number `scan.hops`, whatever made the scan stop.
    pub fn collect_bounded(
        &self,
        start: NodeId,
        max_search: usize,
    ) -> Result<(Vec<T>, Scan), RingError> {
        let scan = self.bounded_scan(start, max_search)?;
        let values = self.copy_after(start, scan.hops)?;
        Ok((values, scan))
    }

    /// Materialize the cycle through `start` into an exactly-sized vector.
    ///
    /// Values run from `start.next` around to `start` itself. Fails if the
    /// cycle does not close within `cfg.max_search` hops.
    pub fn to_array(&self, start: NodeId, cfg: &ScanCfg) -> Result<Vec<T>, RingError> {
        let n = self.closed_len(start, cfg.max_search)?;
        self.copy_after(start, n)
    }
}

/// Bounded iterator returned by `Ring::iter_from`.
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    start: NodeId,
    cur: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cur?;
        let value = self.ring.get(id)?;
        self.remaining -= 1;
        self.cur = self.ring.next(id).filter(|nx| *nx != self.start);
        Some((id, value))
    }
}
