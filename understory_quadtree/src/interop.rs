// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between [`Rectangle`] and Kurbo geometry.
//!
//! A [`Rectangle`]'s anchor maps to the `(x0, y0)` corner of a [`kurbo::Rect`]. Kurbo is
//! agnostic about which way `y` points, so no flipping happens in either direction.

use kurbo::{Point, Rect};

use crate::error::QuadTreeError;
use crate::types::Rectangle;

impl From<Rectangle> for Rect {
    fn from(r: Rectangle) -> Self {
        Self::new(r.x(), r.y(), r.max_x(), r.max_y())
    }
}

impl TryFrom<Rect> for Rectangle {
    type Error = QuadTreeError;

    /// Normalizes `rect` first, so inverted rectangles are accepted; empty ones are not.
    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

impl Rectangle {
    /// The anchor as a Kurbo point.
    pub fn anchor_point(&self) -> Point {
        Point::new(self.x(), self.y())
    }
}
