// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating-point shims for `no_std` builds, in the kurbo `FloatFuncs` style.

/// Math functions backed by `libm` when `std` is unavailable.
#[cfg(not(feature = "std"))]
#[allow(dead_code, reason = "each crate uses only a subset of the shim")]
pub(crate) trait FloatFuncs: Sized {
    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Simultaneous sine and cosine.
    fn sin_cos(self) -> (Self, Self);
    /// Tangent.
    fn tan(self) -> Self;
    /// Round up to the nearest integer.
    fn ceil(self) -> Self;
}

#[cfg(not(feature = "std"))]
impl FloatFuncs for f64 {
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        (libm::sin(self), libm::cos(self))
    }

    fn tan(self) -> Self {
        libm::tan(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }
}
