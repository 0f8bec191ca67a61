// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fast stroke bounds: accumulates extreme points directly instead of
//! building an outline.
//!
//! For every flattened segment the four offset corners are folded in; joins
//! and caps then contribute only the points that can extend the bounds: the
//! miter tip, and the axis-direction extremes of round arcs (computed
//! analytically from the swept angular range rather than from arc geometry).
//! The point set matches the outline strategy's boundary, so both strategies
//! agree to within the flattening tolerance.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use inkbounds_geometry::{BoundingBox, BoundsAccumulator, Point, Vec2};
use inkbounds_path::{Cap, Join, StrokeStyle};

use crate::flatten::Polyline;

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;

/// Below this cross product magnitude two directions count as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Bounds of the stroke of flattened subpaths, without constructing the
/// outline. The caller guarantees a validated style with `width > 0`.
pub(crate) fn fast_stroke_bounds(
    polylines: &[Polyline],
    style: &StrokeStyle,
) -> Option<BoundingBox> {
    let r = style.width / 2.0;
    let mut acc = BoundsAccumulator::new();
    for poly in polylines {
        match poly.points.as_slice() {
            [] => {}
            [p] => {
                if style.cap != Cap::Butt {
                    acc.add_box(BoundingBox::from_point(*p).inflate(r));
                }
            }
            pts => accumulate_subpath(&mut acc, pts, poly.closed, r, style),
        }
    }
    acc.finish()
}

fn accumulate_subpath(
    acc: &mut BoundsAccumulator,
    pts: &[Point],
    closed: bool,
    r: f64,
    style: &StrokeStyle,
) {
    let n = pts.len();
    let seg_count = if closed { n } else { n - 1 };
    let dir = |i: usize| -> Vec2 {
        let d = pts[(i + 1) % n] - pts[i];
        debug_assert!(d.normalize().is_some(), "zero-length segment survived flattening");
        d.normalize().unwrap_or(Vec2::new(1.0, 0.0))
    };

    // Segment offset corners.
    for i in 0..seg_count {
        let offset = r * dir(i).turn_90();
        let a = pts[i];
        let b = pts[(i + 1) % n];
        acc.add_point(a + offset);
        acc.add_point(a - offset);
        acc.add_point(b + offset);
        acc.add_point(b - offset);
    }

    // Joins. For a closed subpath every vertex has one, including the wrap at
    // vertex 0; an open subpath has them at interior vertices only.
    if closed {
        for i in 0..n {
            let prev = dir((i + n - 1) % n);
            accumulate_join(acc, pts[i], prev, dir(i), r, style);
        }
    } else {
        for i in 1..n - 1 {
            accumulate_join(acc, pts[i], dir(i - 1), dir(i), r, style);
        }
        accumulate_cap(acc, pts[n - 1], dir(n - 2), r, style.cap);
        accumulate_cap(acc, pts[0], -dir(0), r, style.cap);
    }
}

fn accumulate_join(
    acc: &mut BoundsAccumulator,
    p: Point,
    d0: Vec2,
    d1: Vec2,
    r: f64,
    style: &StrokeStyle,
) {
    let cross = d0.cross(d1);
    let dot = d0.dot(d1);

    if cross.abs() <= COLLINEAR_EPSILON {
        if dot < 0.0 && style.join == Join::Round {
            // Cusp: the round join bulges a half-disc past the vertex on each
            // traversal side, which together cover the full disc.
            acc.add_box(BoundingBox::from_point(p).inflate(r));
        }
        return;
    }
    // The outer side of the corner: left of travel when turning right.
    let (n0, n1) = if cross < 0.0 {
        (d0.turn_90(), d1.turn_90())
    } else {
        (-d0.turn_90(), -d1.turn_90())
    };
    match style.join {
        // Bevel chord endpoints are segment offset corners, already folded in.
        Join::Bevel => {}
        Join::Miter => {
            let sin_half = ((1.0 + dot) / 2.0).max(0.0).sqrt();
            if sin_half > COLLINEAR_EPSILON && 1.0 / sin_half <= style.miter_limit {
                if let Some(out) = (n0 + n1).normalize() {
                    acc.add_point(p + (r / sin_half) * out);
                }
            }
        }
        Join::Round => {
            let a0 = n0.atan2();
            arc_axis_extremes(acc, p, r, a0, wrap_angle(n1.atan2() - a0));
        }
    }
}

fn accumulate_cap(acc: &mut BoundsAccumulator, p: Point, d_out: Vec2, r: f64, cap: Cap) {
    let n = d_out.turn_90();
    match cap {
        // Butt cap endpoints are segment offset corners.
        Cap::Butt => {}
        Cap::Square => {
            acc.add_point(p + r * n + r * d_out);
            acc.add_point(p - r * n + r * d_out);
        }
        Cap::Round => arc_axis_extremes(acc, p, r, n.atan2(), -PI),
    }
}

/// Fold in the points where a circular arc crosses an axis direction; only
/// those can extend the bounds beyond the arc's endpoints.
fn arc_axis_extremes(acc: &mut BoundsAccumulator, center: Point, r: f64, start: f64, sweep: f64) {
    for k in 0..4 {
        let axis = f64::from(k) * FRAC_PI_2;
        let ahead = positive_mod(if sweep >= 0.0 { axis - start } else { start - axis });
        if ahead <= sweep.abs() {
            acc.add_point(center + r * Vec2::from_angle(axis));
        }
    }
}

/// Wrap an angle difference into `(-PI, PI]`.
fn wrap_angle(a: f64) -> f64 {
    let mut a = a % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

/// Remainder in `[0, TAU)`.
fn positive_mod(a: f64) -> f64 {
    ((a % TAU) + TAU) % TAU
}
