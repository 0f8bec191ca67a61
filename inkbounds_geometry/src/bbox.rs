// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes and bounds accumulation.

use crate::Point;

/// A non-empty axis-aligned bounding box.
///
/// The invariant `x0 <= x1 && y0 <= y1` holds for every constructed value.
/// An *empty* result (no ink at all) is represented as
/// `Option<BoundingBox>::None` rather than as a degenerate box, so that an
/// empty clip intersection cannot be confused with a zero-sized box at the
/// origin. A zero-area box (a single point, or a horizontal/vertical segment)
/// is still `Some`: it has a location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate.
    pub x0: f64,
    /// Minimum Y coordinate.
    pub y0: f64,
    /// Maximum X coordinate.
    pub x1: f64,
    /// Maximum Y coordinate.
    pub y1: f64,
}

impl BoundingBox {
    /// Create a box from corner coordinates, reordering as needed.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// The box covering a single point.
    #[inline]
    pub const fn from_point(p: Point) -> Self {
        Self { x0: p.x, y0: p.y, x1: p.x, y1: p.y }
    }

    /// Width of the box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The smallest box covering `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// The smallest box covering `self` and the point `p`.
    #[inline]
    pub fn union_point(&self, p: Point) -> Self {
        Self {
            x0: self.x0.min(p.x),
            y0: self.y0.min(p.y),
            x1: self.x1.max(p.x),
            y1: self.y1.max(p.y),
        }
    }

    /// Rectangle intersection.
    ///
    /// Returns `None` when the boxes do not overlap; a shared edge or corner
    /// still counts as overlap (zero-area result).
    #[inline]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1);
        let y1 = self.y1.min(other.y1);
        (x0 <= x1 && y0 <= y1).then_some(Self { x0, y0, x1, y1 })
    }

    /// The box grown by `d` on every side.
    ///
    /// Negative `d` shrinks the box; callers are responsible for not shrinking
    /// past empty.
    #[inline]
    pub fn inflate(&self, d: f64) -> Self {
        Self::new(self.x0 - d, self.y0 - d, self.x1 + d, self.y1 + d)
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }

    /// Returns `true` if `other` lies entirely inside `self` (boundaries may
    /// touch).
    #[inline]
    pub fn contains_box(&self, other: &Self) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }

    /// Returns `true` if all four coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }
}

/// Folds points and boxes into an `Option<BoundingBox>`.
///
/// Starts empty (`None`); the first point or box establishes the bounds and
/// subsequent additions grow them.
#[derive(Copy, Clone, Debug, Default)]
pub struct BoundsAccumulator {
    bounds: Option<BoundingBox>,
}

impl BoundsAccumulator {
    /// A fresh, empty accumulator.
    #[inline]
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Grow the bounds to cover `p`.
    #[inline]
    pub fn add_point(&mut self, p: Point) {
        self.bounds = Some(match self.bounds {
            Some(b) => b.union_point(p),
            None => BoundingBox::from_point(p),
        });
    }

    /// Grow the bounds to cover `b`.
    #[inline]
    pub fn add_box(&mut self, b: BoundingBox) {
        self.bounds = Some(match self.bounds {
            Some(cur) => cur.union(&b),
            None => b,
        });
    }

    /// Grow the bounds to cover another (possibly empty) result.
    #[inline]
    pub fn add(&mut self, other: Option<BoundingBox>) {
        if let Some(b) = other {
            self.add_box(b);
        }
    }

    /// The accumulated bounds, `None` if nothing was added.
    #[inline]
    pub const fn finish(self) -> Option<BoundingBox> {
        self.bounds
    }
}
