// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the fallible quadtree operations.

use thiserror::Error;

/// Errors returned by [`Rectangle::new`](crate::Rectangle::new) and
/// [`QuadTree::update`](crate::QuadTree::update).
///
/// Lookups and deletes of absent points are not errors; they report `None` or a zero
/// count instead.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum QuadTreeError {
    /// A rectangle was built with a width or height that is not strictly positive.
    #[error("rectangle extents must be positive, got {width}x{height}")]
    InvalidExtent {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },

    /// No stored rectangle contains the requested point.
    #[error("no rectangle found at ({x}, {y})")]
    NotFound {
        /// Query x.
        x: f64,
        /// Query y.
        y: f64,
    },
}
