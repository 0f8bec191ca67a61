// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points and displacement vectors.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;

/// A position in document units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

/// A displacement between two [`Point`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    /// The midpoint of `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Interpret this point as a vector from the origin.
    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2 { x: self.x, y: self.y }
    }
}

impl Vec2 {
    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z component of the 3D cross product).
    ///
    /// Positive when `other` lies counter-clockwise of `self` in a
    /// y-up frame; the sign convention only needs to be used consistently.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// A unit vector in the direction of `self`, or `None` for a vector too
    /// short to normalize reliably.
    #[inline]
    pub fn normalize(self) -> Option<Self> {
        let len = self.length();
        if len < 1e-12 { None } else { Some(Self::new(self.x / len, self.y / len)) }
    }

    /// This vector rotated a quarter turn counter-clockwise (y-up frame).
    #[inline]
    pub const fn turn_90(self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    /// The angle of this vector, measured counter-clockwise from +x.
    #[inline]
    pub fn atan2(self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.y.atan2(self.x)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::atan2(self.y, self.x)
        }
    }

    /// A unit vector at the given angle.
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    /// Returns `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Self) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl AddAssign<Vec2> for Point {
    #[inline]
    fn add_assign(&mut self, v: Vec2) {
        *self = *self + v;
    }
}

impl Sub<Vec2> for Point {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(self * v.x, self * v.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vector_arithmetic() {
        let p = Point::new(3.0, 4.0);
        let q = Point::new(1.0, 1.0);
        let v = p - q;
        assert_eq!(v, Vec2::new(2.0, 3.0));
        assert_eq!(q + v, p);
        assert_eq!(p - v, q);
    }

    #[test]
    fn normalize_rejects_tiny_vectors() {
        assert!(Vec2::new(1e-15, -1e-15).normalize().is_none());
        let n = Vec2::new(3.0, 4.0).normalize().expect("normalizable");
        assert!((n.length() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn turn_90_is_perpendicular() {
        let v = Vec2::new(2.5, -1.0);
        assert_eq!(v.dot(v.turn_90()), 0.0);
        // Two quarter turns reverse the vector.
        assert_eq!(v.turn_90().turn_90(), -v);
    }

    #[test]
    fn cross_sign_tracks_orientation() {
        let x = Vec2::new(1.0, 0.0);
        assert!(x.cross(x.turn_90()) > 0.0);
        assert!(x.turn_90().cross(x) < 0.0);
    }
}
