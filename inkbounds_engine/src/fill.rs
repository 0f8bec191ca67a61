// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact fill bounds via cubic derivative extrema.

use inkbounds_geometry::{BoundingBox, BoundsAccumulator, Point};
use inkbounds_path::{Path, PathCmd};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;

/// The tight axis-aligned bounds of a path's fill region, `None` for a path
/// with no commands.
///
/// The fill region's extent is the extent of the path's trace: anchor points,
/// plus interior axis extrema of every cubic. Control points steer but are
/// generally not touched, so they never enter the bounds. A `MoveTo`-only
/// subpath still contributes its anchor.
pub fn fill_bounds(path: &Path) -> Option<BoundingBox> {
    fill_bounds_cmds(path.to_cubics().commands())
}

/// [`fill_bounds`] over an arc-free command slice.
pub(crate) fn fill_bounds_cmds(cmds: &[PathCmd]) -> Option<BoundingBox> {
    let mut acc = BoundsAccumulator::new();
    let mut current = Point::ORIGIN;
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => {
                acc.add_point(p);
                current = p;
            }
            PathCmd::CubicTo(c1, c2, p) => {
                acc.add_point(current);
                acc.add_point(p);
                for t in axis_extrema(current.x, c1.x, c2.x, p.x) {
                    acc.add_point(eval_cubic(current, c1, c2, p, t));
                }
                for t in axis_extrema(current.y, c1.y, c2.y, p.y) {
                    acc.add_point(eval_cubic(current, c1, c2, p, t));
                }
                current = p;
            }
            PathCmd::ArcTo { .. } => {
                debug_assert!(false, "arcs are lowered before bounds are taken");
            }
            PathCmd::Close => {}
        }
    }
    acc.finish()
}

/// Evaluate a cubic Bézier at `t`.
pub(crate) fn eval_cubic(p0: Point, c1: Point, c2: Point, p3: Point, t: f64) -> Point {
    let q01 = p0.lerp(c1, t);
    let q12 = c1.lerp(c2, t);
    let q23 = c2.lerp(p3, t);
    q01.lerp(q12, t).lerp(q12.lerp(q23, t), t)
}

/// Parameters in the open interval `(0, 1)` where one coordinate of a cubic
/// is stationary.
///
/// The derivative is the quadratic `a·t² + b·t + c` with
/// `a = 3(p3 - 3p2 + 3p1 - p0)`, `b = 6(p0 - 2p1 + p2)`, `c = 3(p1 - p0)`.
/// Endpoints are excluded; callers add them unconditionally.
fn axis_extrema(p0: f64, p1: f64, p2: f64, p3: f64) -> SmallVec<[f64; 2]> {
    let a = 3.0 * (p3 - 3.0 * p2 + 3.0 * p1 - p0);
    let b = 6.0 * (p0 - 2.0 * p1 + p2);
    let c = 3.0 * (p1 - p0);

    let mut roots = SmallVec::new();
    let mut push = |t: f64| {
        if t > 0.0 && t < 1.0 {
            roots.push(t);
        }
    };

    if a == 0.0 {
        if b != 0.0 {
            push(-c / b);
        }
        return roots;
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return roots;
    }
    // The numerically stable quadratic form: the root pair q/a and c/q avoids
    // cancellation when b² dominates 4ac.
    let sq = disc.sqrt();
    let q = if b >= 0.0 { -0.5 * (b + sq) } else { -0.5 * (b - sq) };
    if q == 0.0 {
        push(0.0);
    } else {
        push(q / a);
        push(c / q);
    }
    roots
}
