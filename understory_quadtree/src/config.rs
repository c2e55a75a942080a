// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time settings for a [`QuadTree`](crate::QuadTree).

use crate::types::Rectangle;

/// Number of rectangles a leaf holds before the next insert promotes it.
pub const DEFAULT_CAPACITY: usize = 4;

/// Deepest level at which a leaf may still be promoted. The root is depth 0, so the
/// default only ever promotes the root.
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Settings fixed for the lifetime of a tree.
///
/// ```
/// use understory_quadtree::{QuadTree, QuadTreeConfig, Rectangle};
///
/// let config = QuadTreeConfig::default()
///     .with_boundary(Rectangle::new(0.0, 0.0, 1024.0, 1024.0).unwrap())
///     .with_capacity(8)
///     .with_max_depth(6);
/// let tree = QuadTree::with_config(config);
/// assert_eq!(tree.boundary().width(), 1024.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadTreeConfig {
    boundary: Rectangle,
    capacity: usize,
    max_depth: usize,
}

impl QuadTreeConfig {
    /// World boundary used by [`Default`]: anchored at `(-50, -50)`, 100 units on a side.
    pub const DEFAULT_BOUNDARY: Rectangle = Rectangle::new_unchecked(-50.0, -50.0, 100.0, 100.0);

    /// Replace the world boundary.
    #[must_use]
    pub const fn with_boundary(mut self, boundary: Rectangle) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the leaf capacity. Zero is treated as one.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Replace the maximum promotion depth. Zero disables promotion entirely.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The fixed world boundary.
    pub const fn boundary(&self) -> Rectangle {
        self.boundary
    }

    /// Leaf capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum promotion depth.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether a leaf at `depth` holding `len` rectangles must be promoted before it
    /// accepts another one.
    pub(crate) const fn should_promote(&self, depth: usize, len: usize) -> bool {
        depth < self.max_depth && len >= self.capacity
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            boundary: Self::DEFAULT_BOUNDARY,
            capacity: DEFAULT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
