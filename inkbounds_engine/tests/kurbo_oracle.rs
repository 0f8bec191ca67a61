// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Differential checks of the fill-bounds math against kurbo's curve extrema.
//!
//! kurbo computes Bézier bounding boxes through its own `ParamCurveExtrema`
//! machinery; matching it pins down the derivative-root math independently of
//! the scenario battery.

use inkbounds_engine::fill_bounds;
use inkbounds_geometry::{Affine, BoundingBox};
use inkbounds_path::PathBuilder;
use kurbo::{CubicBez, ParamCurveExtrema, Shape};

fn assert_rect_close(ours: BoundingBox, theirs: kurbo::Rect, tol: f64) {
    assert!(
        (ours.x0 - theirs.x0).abs() <= tol
            && (ours.y0 - theirs.y0).abs() <= tol
            && (ours.x1 - theirs.x1).abs() <= tol
            && (ours.y1 - theirs.y1).abs() <= tol,
        "{ours:?} != {theirs:?}"
    );
}

#[test]
fn single_cubic_extrema_match_kurbo() {
    let cases = [
        // Symmetric arch.
        [(0.0, 0.0), (100.0, -75.0), (200.0, -75.0), (300.0, 0.0)],
        // Overshooting S.
        [(0.0, 0.0), (400.0, 0.0), (-300.0, 100.0), (100.0, 100.0)],
        // Loop.
        [(100.0, 100.0), (400.0, 0.0), (-200.0, 0.0), (300.0, 100.0)],
        // Nearly-degenerate: collinear control points.
        [(0.0, 0.0), (10.0, 10.0), (20.0, 20.0), (30.0, 30.0)],
        // A segment from the battery's winding curve.
        [(100.0, 100.0), (800.0, 100.0), (800.0, 400.0), (400.0, 400.0)],
    ];
    for [p0, c1, c2, p3] in cases {
        let mut b = PathBuilder::new();
        b.move_to(p0).cubic_to(c1, c2, p3);
        let ours = fill_bounds(&b.build().unwrap()).unwrap();
        // UFCS: `Shape` is also in scope for the `BezPath` check below and
        // provides a competing `bounding_box` for `CubicBez`.
        let theirs = ParamCurveExtrema::bounding_box(&CubicBez::new(p0, c1, c2, p3));
        assert_rect_close(ours, theirs, 1e-9);
    }
}

#[test]
fn multi_segment_path_matches_kurbo_bez_path() {
    let mut b = PathBuilder::new();
    b.move_to((100.0, 100.0))
        .line_to((400.0, 100.0))
        .cubic_to((800.0, 100.0), (800.0, 400.0), (400.0, 400.0))
        .line_to((800.0, 400.0))
        .cubic_to((400.0, 400.0), (400.0, 800.0), (800.0, 800.0))
        .cubic_to((800.0, 900.0), (100.0, 900.0), (100.0, 800.0))
        .close();
    let ours = fill_bounds(&b.build().unwrap()).unwrap();

    let mut k = kurbo::BezPath::new();
    k.move_to((100.0, 100.0));
    k.line_to((400.0, 100.0));
    k.curve_to((800.0, 100.0), (800.0, 400.0), (400.0, 400.0));
    k.line_to((800.0, 400.0));
    k.curve_to((400.0, 400.0), (400.0, 800.0), (800.0, 800.0));
    k.curve_to((800.0, 900.0), (100.0, 900.0), (100.0, 800.0));
    k.close_path();
    assert_rect_close(ours, k.bounding_box(), 1e-9);
}

#[test]
fn corner_projection_matches_kurbo_transform_rect_bbox() {
    let ours_box = BoundingBox::new(400.0, 400.0, 600.0, 600.0);
    let theirs_rect = kurbo::Rect::new(400.0, 400.0, 600.0, 600.0);
    let angles = [0.3, core::f64::consts::FRAC_PI_4, -1.2, 2.9];
    for theta in angles {
        let ours = Affine::rotate_about(theta, inkbounds_geometry::Point::new(500.0, 500.0))
            .transform_bbox(ours_box);
        let theirs = kurbo::Affine::rotate_about(theta, kurbo::Point::new(500.0, 500.0))
            .transform_rect_bbox(theirs_rect);
        assert_rect_close(ours, theirs, 1e-9);
    }
}
