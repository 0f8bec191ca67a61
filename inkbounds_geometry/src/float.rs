// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating-point shims for `no_std` builds, in the kurbo `FloatFuncs` style.
//!
//! Under `std` the inherent `f64` methods are used and this module is empty;
//! without `std` the same method names are provided via `libm`.

/// Math functions backed by `libm` when `std` is unavailable.
#[cfg(not(feature = "std"))]
#[allow(dead_code, reason = "each crate uses only a subset of the shim")]
pub(crate) trait FloatFuncs: Sized {
    /// Absolute value.
    fn abs(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Simultaneous sine and cosine.
    fn sin_cos(self) -> (Self, Self);
}

#[cfg(not(feature = "std"))]
impl FloatFuncs for f64 {
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        (libm::sin(self), libm::cos(self))
    }
}
