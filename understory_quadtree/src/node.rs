// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: leaves that store rectangles and internal nodes that route to quadrants.
//!
//! [`Node`] is a closed sum of [`LeafNode`] and [`InternalNode`]. Every node owns a fixed
//! boundary. An internal node's four children partition that boundary exactly, and a
//! query point or anchor is always routed to the *first* child, in [`Quadrant::ALL`]
//! order, whose boundary contains it. Since boundaries are closed on every edge, points
//! on a shared edge go to whichever quadrant comes first in that order.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::mem;

use tracing::debug;

use crate::config::QuadTreeConfig;
use crate::types::Rectangle;

/// One of the four slots of an [`InternalNode`].
///
/// The names are slot labels, not compass directions: with `y` growing upwards,
/// `Sw` and `Se` cover the upper half of the parent and `Nw` and `Ne` the lower half.
/// Only the order matters; it fixes both the routing tie-break and the dump order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Left column, upper half: `(x, y + h)`.
    Sw,
    /// Left column, lower half: `(x, y)`.
    Nw,
    /// Right column, upper half: `(x + w, y + h)`.
    Se,
    /// Right column, lower half: `(x + w, y)`.
    Ne,
}

impl Quadrant {
    /// All quadrants in routing and dump order.
    pub const ALL: [Self; 4] = [Self::Sw, Self::Nw, Self::Se, Self::Ne];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Sw => 0,
            Self::Nw => 1,
            Self::Se => 2,
            Self::Ne => 3,
        }
    }

    /// Short uppercase label, e.g. `"SW"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sw => "SW",
            Self::Nw => "NW",
            Self::Se => "SE",
            Self::Ne => "NE",
        }
    }
}

/// Terminal node holding rectangles whose anchors fall inside its boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafNode {
    boundary: Rectangle,
    rectangles: Vec<Rectangle>,
}

impl LeafNode {
    /// Create an empty leaf covering `boundary`.
    pub const fn new(boundary: Rectangle) -> Self {
        Self {
            boundary,
            rectangles: Vec::new(),
        }
    }

    /// The region this leaf is responsible for.
    pub const fn boundary(&self) -> Rectangle {
        self.boundary
    }

    /// Stored rectangles in insertion order.
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Number of stored rectangles.
    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    /// Whether the leaf stores nothing.
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    /// Append `rect` if its anchor lies inside this leaf's boundary.
    ///
    /// Returns `false`, leaving the leaf untouched, when the anchor is outside.
    pub fn insert(&mut self, rect: Rectangle) -> bool {
        if !self.boundary.contains_anchor_of(&rect) {
            return false;
        }
        self.rectangles.push(rect);
        true
    }

    /// First stored rectangle, in insertion order, that contains the point.
    pub fn find(&self, x: f64, y: f64) -> Option<&Rectangle> {
        self.rectangles.iter().find(|r| r.contains_point(x, y))
    }

    /// Remove every stored rectangle that contains the point. Returns how many went.
    pub fn delete(&mut self, x: f64, y: f64) -> usize {
        let before = self.rectangles.len();
        self.rectangles.retain(|r| !r.contains_point(x, y));
        before - self.rectangles.len()
    }

    fn write_dump(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        writeln!(out, "Leaf Node - {}", self.boundary)?;
        for r in &self.rectangles {
            indent(out, depth + 1)?;
            writeln!(out, "{r}")?;
        }
        Ok(())
    }
}

/// Branch node owning exactly four children, one per [`Quadrant`].
#[derive(Clone, Debug, PartialEq)]
pub struct InternalNode {
    boundary: Rectangle,
    children: Box<[Node; 4]>,
}

impl InternalNode {
    /// Create an internal node over `boundary` with four empty leaf children.
    pub fn new(boundary: Rectangle) -> Self {
        let children = boundary
            .quadrants()
            .map(|quadrant| Node::Leaf(LeafNode::new(quadrant)));
        Self {
            boundary,
            children: Box::new(children),
        }
    }

    /// The region this node is responsible for.
    pub const fn boundary(&self) -> Rectangle {
        self.boundary
    }

    /// Children in [`Quadrant::ALL`] order.
    pub fn children(&self) -> &[Node; 4] {
        &self.children
    }

    /// The child occupying `quadrant`.
    pub fn child(&self, quadrant: Quadrant) -> &Node {
        &self.children[quadrant.index()]
    }

    /// The quadrant a point is routed to, if any child's boundary contains it.
    pub fn route(&self, x: f64, y: f64) -> Option<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .find(|q| self.children[q.index()].boundary().contains_point(x, y))
    }

    /// Whether no descendant leaf holds a rectangle.
    ///
    /// Emptied structure is never collapsed back into a leaf, so this can be true for a
    /// node that still has grandchildren.
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(Node::is_empty)
    }

    /// Search the child the point routes to.
    pub fn find(&self, x: f64, y: f64) -> Option<&Rectangle> {
        let q = self.route(x, y)?;
        self.children[q.index()].find(x, y)
    }

    /// Delete from the child the point routes to.
    pub fn delete(&mut self, x: f64, y: f64) -> usize {
        match self.route(x, y) {
            Some(q) => self.children[q.index()].delete(x, y),
            None => 0,
        }
    }

    /// Route `rect` by its anchor. The child sits one level below `depth`.
    pub(crate) fn insert(
        &mut self,
        rect: Rectangle,
        depth: usize,
        config: &QuadTreeConfig,
    ) -> bool {
        match self.route(rect.x(), rect.y()) {
            Some(q) => self.children[q.index()].insert(rect, depth + 1, config),
            None => false,
        }
    }

    fn write_dump(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        writeln!(out, "Internal Node - {}", self.boundary)?;
        for child in self.children.iter() {
            child.write_dump(out, depth + 1)?;
        }
        Ok(())
    }
}

/// A quadtree node: either a [`LeafNode`] or an [`InternalNode`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Terminal node storing rectangles.
    Leaf(LeafNode),
    /// Branch node with four children.
    Internal(InternalNode),
}

impl Node {
    /// The region this node is responsible for.
    pub const fn boundary(&self) -> Rectangle {
        match self {
            Self::Leaf(leaf) => leaf.boundary,
            Self::Internal(internal) => internal.boundary,
        }
    }

    /// Whether this node is a leaf.
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Total number of rectangles in this subtree.
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf(leaf) => leaf.len(),
            Self::Internal(internal) => internal.children.iter().map(Self::len).sum(),
        }
    }

    /// Whether this subtree stores nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.is_empty(),
            Self::Internal(internal) => internal.is_empty(),
        }
    }

    /// Number of internal levels below and including this node; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Internal(internal) => {
                1 + internal.children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    /// First rectangle containing the point in the leaf the point routes to.
    pub fn find(&self, x: f64, y: f64) -> Option<&Rectangle> {
        match self {
            Self::Leaf(leaf) => leaf.find(x, y),
            Self::Internal(internal) => internal.find(x, y),
        }
    }

    /// Remove every rectangle containing the point from the leaf the point routes to.
    pub fn delete(&mut self, x: f64, y: f64) -> usize {
        match self {
            Self::Leaf(leaf) => leaf.delete(x, y),
            Self::Internal(internal) => internal.delete(x, y),
        }
    }

    /// Render this subtree, indenting each level by four spaces starting at `depth`.
    pub fn dump(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write_dump(&mut out, depth).ok();
        out
    }

    pub(crate) fn write_dump(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        match self {
            Self::Leaf(leaf) => leaf.write_dump(out, depth),
            Self::Internal(internal) => internal.write_dump(out, depth),
        }
    }

    /// Insert `rect` into this subtree, which sits at `depth` below the root.
    ///
    /// A leaf already holding `config.capacity()` rectangles is promoted first when the
    /// policy allows promotion at this depth.
    pub(crate) fn insert(
        &mut self,
        rect: Rectangle,
        depth: usize,
        config: &QuadTreeConfig,
    ) -> bool {
        let full = matches!(self, Self::Leaf(leaf) if config.should_promote(depth, leaf.len()));
        if full {
            self.promote(depth, config);
        }
        match self {
            Self::Leaf(leaf) => leaf.insert(rect),
            Self::Internal(internal) => internal.insert(rect, depth, config),
        }
    }

    /// Replace a leaf with an internal node over the same boundary, re-inserting its
    /// rectangles in their original order. Internal nodes are left alone.
    fn promote(&mut self, depth: usize, config: &QuadTreeConfig) {
        let Self::Leaf(leaf) = self else {
            return;
        };
        let boundary = leaf.boundary;
        let rectangles = mem::take(&mut leaf.rectangles);
        debug!(
            depth,
            %boundary,
            redistributed = rectangles.len(),
            "promoting leaf to internal node"
        );
        let mut internal = InternalNode::new(boundary);
        for rect in rectangles {
            if !internal.insert(rect, depth, config) {
                debug!(%rect, %boundary, "rectangle lost while promoting");
            }
        }
        *self = Self::Internal(internal);
    }
}

/// Depth-first iterator over stored rectangles, children visited in [`Quadrant::ALL`] order.
#[derive(Clone, Debug)]
pub struct Rectangles<'a> {
    stack: Vec<&'a Node>,
    current: core::slice::Iter<'a, Rectangle>,
}

impl<'a> Rectangles<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self {
            stack: alloc::vec![root],
            current: core::slice::Iter::default(),
        }
    }
}

impl<'a> Iterator for Rectangles<'a> {
    type Item = &'a Rectangle;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(r) = self.current.next() {
                return Some(r);
            }
            match self.stack.pop()? {
                Node::Leaf(leaf) => self.current = leaf.rectangles.iter(),
                Node::Internal(internal) => self.stack.extend(internal.children.iter().rev()),
            }
        }
    }
}

/// Collect rectangles whose anchor lies in `area`, skipping subtrees that cannot hold one.
pub(crate) fn collect_anchored<'a>(
    node: &'a Node,
    area: &Rectangle,
    out: &mut Vec<&'a Rectangle>,
) {
    if !node.boundary().intersects(area) {
        return;
    }
    match node {
        Node::Leaf(leaf) => {
            out.extend(leaf.rectangles.iter().filter(|r| area.contains_anchor_of(r)));
        }
        Node::Internal(internal) => {
            for child in internal.children.iter() {
                collect_anchored(child, area, out);
            }
        }
    }
}

fn indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("    ")?;
    }
    Ok(())
}
