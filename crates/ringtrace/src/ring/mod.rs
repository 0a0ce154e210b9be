//! Generic circular doubly-linked list.
//!
//! Purpose
//! - Hold an arbitrary value type in a circular list with O(1) unlink.
//! - Give every traversal a hard hop cap so a malformed list (cut into an open
//!   chain, or with links into a second cycle) cannot loop forever.
//!
//! Layout
//! - `types`: `NodeId`, `Node`, `ScanCfg`, `Scan`, `ScanStop`.
//! - `list`: the `Ring` arena and its operations.

mod list;
mod types;

pub use list::{Iter, Ring};
pub use types::{Node, NodeId, Scan, ScanCfg, ScanStop, DEFAULT_MAX_SEARCH};
