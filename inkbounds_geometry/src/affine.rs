// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D affine transforms.

use core::ops::Mul;

use crate::{BoundingBox, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;

/// A 2D affine transform, stored as the six coefficients `[a, b, c, d, e, f]`
/// of the matrix
///
/// ```text
/// | a c e |
/// | b d f |
/// ```
///
/// so that applying the transform to `(x, y)` yields
/// `(a·x + c·y + e, b·x + d·y + f)`.
///
/// Composition follows the kurbo convention: `m1 * m2` applies `m2` first,
/// i.e. the later-applied transform composes on the left of the accumulated
/// state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Affine([f64; 6]);

impl Affine {
    /// The identity transform.
    pub const IDENTITY: Self = Self::scale(1.0);

    /// Construct from coefficients `[a, b, c, d, e, f]`.
    #[inline]
    pub const fn new(coeffs: [f64; 6]) -> Self {
        Self(coeffs)
    }

    /// The coefficients `[a, b, c, d, e, f]`.
    #[inline]
    pub const fn as_coeffs(self) -> [f64; 6] {
        self.0
    }

    /// A pure translation.
    #[inline]
    pub fn translate(v: impl Into<Vec2>) -> Self {
        let v = v.into();
        Self([1.0, 0.0, 0.0, 1.0, v.x, v.y])
    }

    /// A uniform scale about the origin.
    #[inline]
    pub const fn scale(s: f64) -> Self {
        Self([s, 0.0, 0.0, s, 0.0, 0.0])
    }

    /// A non-uniform scale about the origin.
    #[inline]
    pub const fn scale_non_uniform(sx: f64, sy: f64) -> Self {
        Self([sx, 0.0, 0.0, sy, 0.0, 0.0])
    }

    /// A rotation about the origin by `theta` radians (counter-clockwise in a
    /// y-up frame).
    #[inline]
    pub fn rotate(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self([c, s, -s, c, 0.0, 0.0])
    }

    /// A rotation about `center` by `theta` radians.
    #[inline]
    pub fn rotate_about(theta: f64, center: Point) -> Self {
        Self::translate(center.to_vec2()) * Self::rotate(theta) * Self::translate(-center.to_vec2())
    }

    /// Returns `true` if all coefficients are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Transform a bounding box by mapping all four corners and taking the
    /// min/max of the images.
    ///
    /// Scaling the extents independently would be wrong under rotation: the
    /// image of an axis-aligned box is a rotated quadrilateral, and its
    /// axis-aligned enclosure is generally larger than a naively-scaled box.
    pub fn transform_bbox(self, b: BoundingBox) -> BoundingBox {
        let corners = [
            self * Point::new(b.x0, b.y0),
            self * Point::new(b.x1, b.y0),
            self * Point::new(b.x1, b.y1),
            self * Point::new(b.x0, b.y1),
        ];
        let mut out = BoundingBox::from_point(corners[0]);
        for c in &corners[1..] {
            out = out.union_point(*c);
        }
        out
    }
}

impl Default for Affine {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Point> for Affine {
    type Output = Point;

    #[inline]
    fn mul(self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.0;
        Point::new(a * p.x + c * p.y + e, b * p.x + d * p.y + f)
    }
}

impl Mul for Affine {
    type Output = Self;

    /// `self * other` applies `other` first.
    #[inline]
    fn mul(self, other: Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.0;
        let [a2, b2, c2, d2, e2, f2] = other.0;
        Self([
            a1 * a2 + c1 * b2,
            b1 * a2 + d1 * b2,
            a1 * c2 + c1 * d2,
            b1 * c2 + d1 * d2,
            a1 * e2 + c1 * f2 + e1,
            b1 * e2 + d1 * f2 + f1,
        ])
    }
}
