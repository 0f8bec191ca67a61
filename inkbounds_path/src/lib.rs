// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkbounds Path: the validated path IR consumed by the bounds engine.
//!
//! This crate defines the drawing-command vocabulary between ingestion layers
//! (an SVG flattener, scripted test scenes) and the bounds engine:
//!
//! - [`PathCmd`] and [`Path`]: a tagged command sequence
//!   (move/line/cubic/arc/close) validated at construction. A [`Path`] is an
//!   immutable `Arc`-backed value, cheap to clone into long-lived scenes.
//! - [`PathBuilder`]: accumulates commands and validates them into a [`Path`].
//! - [`Path::to_cubics`]: lowers every elliptical arc into cubic Bézier
//!   segments so that downstream curve math handles one segment kind.
//! - [`StrokeStyle`], [`Cap`], [`Join`], [`PaintMode`]: stroke parameters and
//!   the fill/stroke paint selector.
//! - [`GeometryError`]: the rejection taxonomy for malformed input. Invalid
//!   geometry fails fast at construction; it is never coerced to a zero box.
//!
//! ## Validation invariants
//!
//! - Every coordinate and arc parameter is finite.
//! - Every subpath begins with `MoveTo`; drawing commands before the first
//!   `MoveTo` (or directly after a `Close`) are rejected.
//! - An arc with a zero radius and a non-coincident endpoint is rejected; an
//!   arc whose endpoints coincide is accepted and lowered to nothing.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Either the `std` (default) or the
//! `libm` feature must be enabled.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("inkbounds_path requires either the `std` or `libm` feature");

mod arc;
mod builder;
mod error;
mod float;
mod path;
mod stroke;

pub use builder::PathBuilder;
pub use error::GeometryError;
pub use path::{Path, PathCmd};
pub use stroke::{Cap, Join, PaintMode, StrokeStyle};
