// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Development-only cross-validation scenarios for the Inkbounds backends.
//!
//! The scenario battery is a fixed set of scenes spanning fills, strokes with
//! every join and cap, transforms, clips, and degenerate inputs. Both bounds
//! strategies run every scenario and must agree within a small tolerance;
//! a disagreement localizes a bug to whichever strategy is wrong about that
//! scene's geometry.
//!
//! Run the battery with
//! `cargo test -p inkbounds_scenarios`.
//!
//! To run only a subset of scenarios, set `INKBOUNDS_CASE` (supports `*`
//! globs), e.g. `INKBOUNDS_CASE='stroke_*' cargo test -p inkbounds_scenarios`.

#![allow(
    missing_docs,
    reason = "development-only crate; scenarios are self-documenting via their names"
)]

use std::fmt;

use inkbounds_engine::{BoundsBackend, Scene};
use inkbounds_geometry::BoundingBox;
use inkbounds_path::GeometryError;

pub mod cases;

/// A named scene in the battery.
#[derive(Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub scene: Scene,
}

/// One backend's answer for one scenario.
pub type BackendResult = Result<Option<BoundingBox>, GeometryError>;

/// A scenario on which two backends disagree.
#[derive(Debug)]
pub struct Mismatch {
    pub scenario: &'static str,
    pub left_backend: &'static str,
    pub right_backend: &'static str,
    pub left: BackendResult,
    pub right: BackendResult,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} => {:?}, {} => {:?}",
            self.scenario, self.left_backend, self.left, self.right_backend, self.right
        )
    }
}

/// Run every selected scenario through both backends and collect the
/// disagreements.
///
/// Two `Ok(Some(_))` results agree when no coordinate differs by more than
/// `tolerance`; `Ok(None)` only agrees with `Ok(None)`, and errors must be
/// identical.
pub fn cross_validate(
    left: &dyn BoundsBackend,
    right: &dyn BoundsBackend,
    tolerance: f64,
) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    for scenario in cases::selected_scenarios() {
        let a = left.compute(&scenario.scene);
        let b = right.compute(&scenario.scene);
        if !results_agree(&a, &b, tolerance) {
            mismatches.push(Mismatch {
                scenario: scenario.name,
                left_backend: left.name(),
                right_backend: right.name(),
                left: a,
                right: b,
            });
        }
    }
    mismatches
}

fn results_agree(a: &BackendResult, b: &BackendResult, tolerance: f64) -> bool {
    match (a, b) {
        (Ok(None), Ok(None)) => true,
        (Ok(Some(x)), Ok(Some(y))) => boxes_agree(x, y, tolerance),
        (Err(e1), Err(e2)) => e1 == e2,
        _ => false,
    }
}

fn boxes_agree(a: &BoundingBox, b: &BoundingBox, tolerance: f64) -> bool {
    (a.x0 - b.x0).abs() <= tolerance
        && (a.y0 - b.y0).abs() <= tolerance
        && (a.x1 - b.x1).abs() <= tolerance
        && (a.y1 - b.y1).abs() <= tolerance
}
