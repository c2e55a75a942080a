// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types.

use core::fmt;

use crate::error::QuadTreeError;

/// Axis-aligned rectangle anchored at its bottom-left corner.
///
/// The anchor `(x, y)` is both the rectangle's position and the key used to route it
/// through a [`QuadTree`](crate::QuadTree). Width and height are always positive; the
/// only way to build a `Rectangle` is [`Rectangle::new`], which rejects anything else.
///
/// Rectangles are values: there are no setters, and updating one means replacing it.
///
/// ```
/// use understory_quadtree::Rectangle;
///
/// let r = Rectangle::new(-40.0, 30.0, 10.0, 10.0).unwrap();
/// assert!(r.contains_point(-30.0, 40.0));
/// assert_eq!(r.to_string(), "Rectangle at (-40.00, 30.00): 10.00x10.00");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle from its anchor and extents.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidExtent`] when `width` or `height` is not
    /// strictly positive (NaN included).
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, QuadTreeError> {
        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            return Err(QuadTreeError::InvalidExtent { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Build without validation. Callers guarantee positive extents.
    pub(crate) const fn new_unchecked(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the anchor (left edge).
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate of the anchor (bottom edge).
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Horizontal extent.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The anchor point `(x, y)`.
    pub const fn anchor(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the point lies inside the rectangle. All four edges are inclusive.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        self.x <= px && px <= self.max_x() && self.y <= py && py <= self.max_y()
    }

    /// Whether the anchor of `other` lies inside this rectangle.
    pub fn contains_anchor_of(&self, other: &Self) -> bool {
        self.contains_point(other.x, other.y)
    }

    /// Whether `other` lies entirely inside this rectangle (shared edges allowed).
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.max_x() <= self.max_x()
            && other.y >= self.y
            && other.max_y() <= self.max_y()
    }

    /// Whether the two rectangles overlap. Rectangles that only touch along an edge
    /// or at a corner count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        other.x <= self.max_x()
            && other.max_x() >= self.x
            && other.y <= self.max_y()
            && other.max_y() >= self.y
    }

    /// Split into four equal quadrants, ordered SW, NW, SE, NE.
    ///
    /// The labels follow the tree's slot naming rather than compass geometry:
    /// SW and SE sit on the upper half (`y + h`), NW and NE on the lower half.
    /// See [`Quadrant`](crate::Quadrant).
    pub fn quadrants(&self) -> [Self; 4] {
        let w = self.width / 2.0;
        let h = self.height / 2.0;
        let (x, y) = (self.x, self.y);
        let part = |left, bottom| Self::new_unchecked(left, bottom, w, h);
        [part(x, y + h), part(x, y), part(x + w, y + h), part(x + w, y)]
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle at ({:.2}, {:.2}): {:.2}x{:.2}",
            self.x, self.y, self.width, self.height
        )
    }
}
