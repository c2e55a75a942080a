// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`QuadTree`] container: world boundary, root slot and promotion policy.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::config::QuadTreeConfig;
use crate::error::QuadTreeError;
use crate::node::{LeafNode, Node, Rectangles, collect_anchored};
use crate::types::Rectangle;

/// Anchor-keyed region quadtree.
///
/// The root starts as an empty leaf over the configured world boundary. When a leaf
/// already holds [`capacity`](QuadTreeConfig::capacity) rectangles and receives another
/// one, it is promoted to an internal node (if the configured
/// [`max_depth`](QuadTreeConfig::max_depth) allows it) and its rectangles are re-inserted
/// into four fresh children. Promotion is one-way: deleting everything leaves the
/// subdivided structure in place.
///
/// The tree is a plain owned value with no interior mutability. Share it across
/// threads by wrapping the whole tree in a single lock.
///
/// ```
/// use understory_quadtree::QuadTree;
///
/// let mut tree = QuadTree::new();
/// tree.insert(10.0, 10.0, 5.0, 5.0).unwrap();
/// tree.update(10.0, 10.0, 20.0, 20.0, 7.0, 7.0).unwrap();
///
/// assert!(tree.find(10.0, 10.0).is_none());
/// let r = tree.find(20.0, 20.0).unwrap();
/// assert_eq!((r.width(), r.height()), (7.0, 7.0));
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree {
    config: QuadTreeConfig,
    root: Node,
}

impl QuadTree {
    /// Create an empty tree with [`QuadTreeConfig::default`].
    pub fn new() -> Self {
        Self::with_config(QuadTreeConfig::default())
    }

    /// Create an empty tree with explicit settings.
    pub const fn with_config(config: QuadTreeConfig) -> Self {
        Self {
            root: Node::Leaf(LeafNode::new(config.boundary())),
            config,
        }
    }

    /// The fixed world boundary.
    pub const fn boundary(&self) -> Rectangle {
        self.config.boundary()
    }

    /// Settings this tree was built with.
    pub const fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// The root node.
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Total number of stored rectangles.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the tree stores nothing. Promoted structure is not counted.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Drop everything and start over with an empty leaf root.
    pub fn clear(&mut self) {
        self.root = Node::Leaf(LeafNode::new(self.config.boundary()));
    }

    /// Build a rectangle and insert it.
    ///
    /// Returns `Ok(false)` when the anchor lies outside the world boundary; such inserts
    /// are dropped without touching the tree.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidExtent`] if `width` or `height` is not positive.
    pub fn insert(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<bool, QuadTreeError> {
        let rect = Rectangle::new(x, y, width, height)?;
        Ok(self.insert_rect(rect))
    }

    /// Insert an already-built rectangle. Returns whether it was placed.
    ///
    /// A full root leaf is promoted before routing, so an anchor outside the world still
    /// promotes it; the rectangle is then dropped where routing fails.
    pub fn insert_rect(&mut self, rect: Rectangle) -> bool {
        let placed = self.root.insert(rect, 0, &self.config);
        if placed {
            trace!(%rect, "insert");
        } else {
            debug!(%rect, "anchor outside world boundary, insert dropped");
        }
        placed
    }

    /// First rectangle containing `(x, y)` in the leaf the point routes to.
    ///
    /// Only that leaf is searched: a rectangle anchored in a neighbouring quadrant is not
    /// found even if its extent reaches the point.
    pub fn find(&self, x: f64, y: f64) -> Option<&Rectangle> {
        self.root.find(x, y)
    }

    /// Remove every rectangle containing `(x, y)` from the leaf the point routes to.
    ///
    /// Returns the number removed; deleting where nothing is stored is not an error.
    pub fn delete(&mut self, x: f64, y: f64) -> usize {
        let removed = self.root.delete(x, y);
        trace!(x, y, removed, "delete");
        removed
    }

    /// Replace whatever `find(x, y)` would return with a new rectangle.
    ///
    /// Every rectangle containing `(x, y)` in the routed leaf is deleted first, as with
    /// [`delete`](Self::delete); the replacement may land in a different quadrant.
    ///
    /// # Errors
    ///
    /// - [`QuadTreeError::NotFound`] if nothing contains `(x, y)`.
    /// - [`QuadTreeError::InvalidExtent`] if the replacement extents are not positive.
    ///
    /// The tree is unchanged in both cases.
    pub fn update(
        &mut self,
        x: f64,
        y: f64,
        new_x: f64,
        new_y: f64,
        new_width: f64,
        new_height: f64,
    ) -> Result<(), QuadTreeError> {
        if self.find(x, y).is_none() {
            debug!(x, y, "update target not found");
            return Err(QuadTreeError::NotFound { x, y });
        }
        let replacement = Rectangle::new(new_x, new_y, new_width, new_height)?;
        let _ = self.delete(x, y);
        let _ = self.insert_rect(replacement);
        Ok(())
    }

    /// All stored rectangles, depth-first in dump order.
    pub fn iter(&self) -> Rectangles<'_> {
        Rectangles::new(&self.root)
    }

    /// Rectangles whose anchor lies inside `area`, in dump order.
    ///
    /// Subtrees whose boundary does not touch `area` are skipped.
    pub fn query_anchors(&self, area: Rectangle) -> impl Iterator<Item = &Rectangle> + '_ {
        let mut out = Vec::new();
        collect_anchored(&self.root, &area, &mut out);
        out.into_iter()
    }

    /// Multi-line structural trace of the tree.
    ///
    /// Each level is indented by four spaces. Internal nodes print
    /// `Internal Node - <boundary>` followed by their children in SW, NW, SE, NE order;
    /// leaves print `Leaf Node - <boundary>` followed by one line per rectangle.
    pub fn dump(&self) -> String {
        self.root.dump(0)
    }
}

impl Default for QuadTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_dump(f, 0)
    }
}

impl<'a> IntoIterator for &'a QuadTree {
    type Item = &'a Rectangle;
    type IntoIter = Rectangles<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
