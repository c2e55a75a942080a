// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: an anchor-keyed 2D region quadtree.
//!
//! Understory Quadtree stores axis-aligned rectangles and places each one by its anchor
//! (bottom-left corner).
//!
//! - Insert rectangles, find the first one covering a point, delete all of them covering a
//!   point, and update by replacement.
//! - Leaves are promoted to internal nodes with four quadrant children once they exceed a
//!   fixed capacity. Promotion never runs backwards.
//! - A structural dump renders the tree with a stable layout and child order, handy for
//!   golden tests and debugging.
//!
//! It is `no_std` (with `alloc`), single-threaded and does no I/O. Diagnostics go through
//! [`tracing`] events; install a subscriber in your application to see them.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Node, QuadTree, Quadrant};
//!
//! // Default world: anchored at (-50, -50), 100 units on a side, leaf capacity 4.
//! let mut tree = QuadTree::new();
//! for (x, y) in [(-40.0, -40.0), (40.0, -40.0), (-40.0, 40.0), (-30.0, 40.0)] {
//!     tree.insert(x, y, 10.0, 10.0).unwrap();
//! }
//! assert!(tree.root().is_leaf());
//!
//! // The fifth insert promotes the root.
//! tree.insert(-35.0, 40.0, 10.0, 10.0).unwrap();
//! let Node::Internal(root) = tree.root() else { unreachable!() };
//! assert_eq!(root.child(Quadrant::Sw).len(), 3);
//!
//! // Lookups are region based: any point covered by a stored rectangle finds it.
//! let hit = tree.find(-25.0, 45.0).unwrap();
//! assert_eq!(hit.to_string(), "Rectangle at (-30.00, 40.00): 10.00x10.00");
//!
//! // Deletes remove every rectangle covering the point.
//! assert_eq!(tree.delete(-30.0, 45.0), 3);
//! assert!(tree.find(-30.0, 45.0).is_none());
//! ```
//!
//! ## Quadrants and tie-breaks
//!
//! Subdividing a boundary `(x, y, w, h)` yields four children with half the extents, in
//! the fixed order [`Quadrant::ALL`]: SW `(x, y+h)`, NW `(x, y)`, SE `(x+w, y+h)`,
//! NE `(x+w, y)`. The labels are slot names kept for dump compatibility, not compass
//! directions. Boundaries are closed, so a point on a shared edge belongs to every
//! adjacent quadrant; routing always picks the first one in that order.
//!
//! ## Lookup semantics
//!
//! [`QuadTree::find`] and [`QuadTree::delete`] route the *query point* down the tree and
//! then scan a single leaf. A rectangle whose extent crosses into a neighbouring
//! quadrant is only reachable from the quadrant holding its anchor.
//!
//! ## Promotion depth
//!
//! By default only the root leaf is ever promoted ([`DEFAULT_MAX_DEPTH`] is 1), and the
//! four children then grow without bound. Raise
//! [`QuadTreeConfig::with_max_depth`] to let child leaves subdivide too.
//!
//! ## Features
//!
//! - `kurbo`: conversions between [`Rectangle`] and `kurbo::Rect`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
#[cfg(feature = "kurbo")]
pub mod interop;
pub mod node;
pub mod tree;
pub mod types;

pub use config::{DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH, QuadTreeConfig};
pub use error::QuadTreeError;
pub use node::{InternalNode, LeafNode, Node, Quadrant, Rectangles};
pub use tree::QuadTree;
pub use types::Rectangle;
