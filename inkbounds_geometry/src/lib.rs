// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkbounds Geometry: the value types under the bounding-box engine.
//!
//! This crate defines the small, plain-old-data geometry vocabulary shared by
//! the rest of the Inkbounds stack:
//!
//! - [`Point`] and [`Vec2`], double-precision positions and displacements.
//! - [`Affine`], a 2×3 transform with kurbo-style composition.
//! - [`BoundingBox`], a non-empty axis-aligned box. The *empty* result is
//!   represented as `Option<BoundingBox>` so that emptiness is a
//!   distinguishable sentinel rather than a degenerate box at the origin, and
//!   propagates correctly through unions and intersections.
//! - [`BoundsAccumulator`], a fold of points and boxes into an
//!   `Option<BoundingBox>`.
//!
//! All types are immutable values; every operation returns a new value.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std`. Either the `std` (default) or the `libm` feature
//! must be enabled to provide floating-point math.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("inkbounds_geometry requires either the `std` or `libm` feature");

mod affine;
mod bbox;
mod float;
mod point;

pub use affine::Affine;
pub use bbox::{BoundingBox, BoundsAccumulator};
pub use point::{Point, Vec2};
