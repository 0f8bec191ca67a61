// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic flattening shared by both stroke strategies.
//!
//! Both backends offset the same flattened spine, so any flattening error is
//! common-mode and cancels out of the cross-validation; only the join and cap
//! representations differ between them.

use alloc::vec::Vec;

use inkbounds_geometry::Point;
use inkbounds_path::{Path, PathCmd};

/// Recursion cap for adaptive subdivision. `2^16` segments per cubic is far
/// beyond what any tolerance above f64 noise requires.
const MAX_DEPTH: u32 = 16;

/// Vertices closer than this are merged so every retained segment has a
/// usable direction.
const MERGE_EPSILON: f64 = 1e-12;

/// One flattened subpath.
#[derive(Clone, Debug)]
pub(crate) struct Polyline {
    /// Vertices, deduplicated; a closed polyline does not repeat its first
    /// vertex at the end.
    pub points: Vec<Point>,
    /// Whether the subpath was closed with `Close`.
    pub closed: bool,
}

/// Flatten an arc-free path into polylines within `tolerance` of the true
/// curves.
///
/// Callers lower arcs with [`Path::to_cubics`] first. A subpath that is a
/// bare `MoveTo` yields a single-vertex polyline so that cap conventions for
/// degenerate subpaths can apply.
pub(crate) fn flatten_path(path: &Path, tolerance: f64) -> Vec<Polyline> {
    let mut out = Vec::new();
    let mut current: Option<Polyline> = None;
    for cmd in path.commands() {
        match *cmd {
            PathCmd::MoveTo(p) => {
                if let Some(poly) = current.take() {
                    out.push(poly);
                }
                current = Some(Polyline { points: alloc::vec![p], closed: false });
            }
            PathCmd::LineTo(p) => {
                if let Some(poly) = current.as_mut() {
                    push_vertex(&mut poly.points, p);
                }
            }
            PathCmd::CubicTo(c1, c2, p) => {
                if let Some(poly) = current.as_mut() {
                    let p0 = *poly.points.last().unwrap_or(&p);
                    flatten_cubic(&mut poly.points, p0, c1, c2, p, tolerance, 0);
                }
            }
            PathCmd::ArcTo { .. } => {
                debug_assert!(false, "arcs are lowered before flattening");
            }
            PathCmd::Close => {
                if let Some(mut poly) = current.take() {
                    // Drop a trailing vertex that coincides with the start so
                    // the wrap segment is never zero-length.
                    if poly.points.len() > 1
                        && coincident(poly.points[0], *poly.points.last().unwrap_or(&Point::ORIGIN))
                    {
                        poly.points.pop();
                    }
                    poly.closed = true;
                    out.push(poly);
                }
            }
        }
    }
    if let Some(poly) = current.take() {
        out.push(poly);
    }
    out
}

fn coincident(a: Point, b: Point) -> bool {
    (a - b).length_squared() <= MERGE_EPSILON * MERGE_EPSILON
}

fn push_vertex(points: &mut Vec<Point>, p: Point) {
    match points.last() {
        Some(last) if coincident(*last, p) => {}
        _ => points.push(p),
    }
}

/// Distance from `p` to the segment `a`-`b` (to `a` when the segment is
/// degenerate).
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= MERGE_EPSILON * MERGE_EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + t * ab)
}

fn flatten_cubic(
    points: &mut Vec<Point>,
    p0: Point,
    c1: Point,
    c2: Point,
    p3: Point,
    tolerance: f64,
    depth: u32,
) {
    // The curve lies inside the hull of its control points, so it stays within
    // tolerance of the chord once both control points do.
    let flat = segment_distance(c1, p0, p3) <= tolerance && segment_distance(c2, p0, p3) <= tolerance;
    if flat || depth >= MAX_DEPTH {
        push_vertex(points, p3);
        return;
    }
    // de Casteljau split at t = 1/2.
    let m01 = p0.midpoint(c1);
    let m12 = c1.midpoint(c2);
    let m23 = c2.midpoint(p3);
    let m012 = m01.midpoint(m12);
    let m123 = m12.midpoint(m23);
    let mid = m012.midpoint(m123);
    flatten_cubic(points, p0, m01, m012, mid, tolerance, depth + 1);
    flatten_cubic(points, mid, m123, m23, p3, tolerance, depth + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkbounds_path::PathBuilder;

    fn flat(path: &Path, tolerance: f64) -> Vec<Polyline> {
        flatten_path(&path.to_cubics(), tolerance)
    }

    #[test]
    fn polyline_passes_through_line_vertices() {
        let mut b = PathBuilder::new();
        b.move_to((0.0, 0.0)).line_to((10.0, 0.0)).line_to((10.0, 10.0));
        let polys = flat(&b.build().unwrap(), 0.01);
        assert_eq!(polys.len(), 1);
        assert!(!polys[0].closed);
        assert_eq!(
            polys[0].points,
            alloc::vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]
        );
    }

    #[test]
    fn cubic_stays_within_tolerance_of_samples() {
        let p0 = Point::new(0.0, 0.0);
        let c1 = Point::new(50.0, 100.0);
        let c2 = Point::new(150.0, -100.0);
        let p3 = Point::new(200.0, 0.0);
        let mut b = PathBuilder::new();
        b.move_to(p0).cubic_to(c1, c2, p3);
        let tolerance = 0.01;
        let polys = flat(&b.build().unwrap(), tolerance);
        let pts = &polys[0].points;
        for i in 0..=100 {
            let t = f64::from(i) / 100.0;
            let q01 = p0.lerp(c1, t);
            let q12 = c1.lerp(c2, t);
            let q23 = c2.lerp(p3, t);
            let sample = q01.lerp(q12, t).lerp(q12.lerp(q23, t), t);
            let dist = pts
                .windows(2)
                .map(|w| segment_distance(sample, w[0], w[1]))
                .fold(f64::INFINITY, f64::min);
            assert!(dist <= tolerance * 1.5, "sample at t={t} is {dist} off the polyline");
        }
    }

    #[test]
    fn close_drops_the_duplicate_start_vertex() {
        let mut b = PathBuilder::new();
        b.move_to((0.0, 0.0))
            .line_to((10.0, 0.0))
            .line_to((10.0, 10.0))
            .line_to((0.0, 0.0))
            .close();
        let polys = flat(&b.build().unwrap(), 0.01);
        assert!(polys[0].closed);
        assert_eq!(polys[0].points.len(), 3);
    }

    #[test]
    fn bare_move_to_yields_a_single_vertex() {
        let mut b = PathBuilder::new();
        b.move_to((5.0, 5.0));
        let polys = flat(&b.build().unwrap(), 0.01);
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0].points, alloc::vec![Point::new(5.0, 5.0)]);
    }
}
