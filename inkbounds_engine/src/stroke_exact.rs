// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke outlining: builds the boundary of the region a pen sweeps along the
//! flattened spine, with joins and caps, as an ordinary path whose fill
//! bounds are the stroke bounds.
//!
//! Each open subpath becomes one ring: the offset curve along one side, an
//! end cap, the offset curve back along the other side, a start cap. A closed
//! subpath becomes two rings, one per side. Round joins and caps are emitted
//! as circular-arc cubics.

use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use inkbounds_geometry::{Point, Vec2};
use inkbounds_path::{Cap, Join, PathCmd, StrokeStyle};

use crate::flatten::Polyline;

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;

/// Below this cross product magnitude two directions count as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Build the stroke outline of flattened subpaths.
///
/// The caller guarantees a validated style with `width > 0`. The result is
/// arc-free and suitable for [`crate::fill::fill_bounds_cmds`].
pub(crate) fn stroke_outline(polylines: &[Polyline], style: &StrokeStyle) -> Vec<PathCmd> {
    let r = style.width / 2.0;
    let mut sink = OutlineSink::new();
    for poly in polylines {
        match poly.points.as_slice() {
            [] => {}
            [p] => sink.degenerate_dot(*p, r, style.cap),
            pts if poly.closed => {
                sink.closed_ring(pts, r, style);
                let mut rev = pts.to_vec();
                rev.reverse();
                sink.closed_ring(&rev, r, style);
            }
            pts => sink.open_ring(pts, r, style),
        }
    }
    sink.finish()
}

/// Unit direction of each segment. With `closed`, includes the wrap segment
/// from the last vertex back to the first.
fn segment_dirs(pts: &[Point], closed: bool) -> Vec<Vec2> {
    let n = if closed { pts.len() } else { pts.len() - 1 };
    (0..n)
        .map(|i| {
            let d = pts[(i + 1) % pts.len()] - pts[i];
            // Flattening merges coincident vertices, so every retained
            // segment normalizes.
            debug_assert!(d.normalize().is_some(), "zero-length segment survived flattening");
            d.normalize().unwrap_or(Vec2::new(1.0, 0.0))
        })
        .collect()
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

struct OutlineSink {
    cmds: Vec<PathCmd>,
    current: Point,
}

impl OutlineSink {
    fn new() -> Self {
        Self { cmds: Vec::new(), current: Point::ORIGIN }
    }

    fn finish(self) -> Vec<PathCmd> {
        self.cmds
    }

    fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo(p));
        self.current = p;
    }

    fn line_to(&mut self, p: Point) {
        if (p - self.current).length_squared() > 0.0 {
            self.cmds.push(PathCmd::LineTo(p));
            self.current = p;
        }
    }

    fn close(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    /// Append a circular arc about `center` from `start` sweeping `sweep`
    /// radians, as cubic segments of at most a quarter turn.
    fn arc(&mut self, center: Point, radius: f64, start: f64, sweep: f64) {
        if sweep == 0.0 {
            return;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "joins and caps sweep at most one full turn"
        )]
        let segments = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
        let step = sweep / segments as f64;
        let k = (4.0 / 3.0) * (step / 4.0).tan() * radius;
        let point_at = |theta: f64| center + radius * Vec2::from_angle(theta);

        self.line_to(point_at(start));
        for i in 0..segments {
            let t0 = start + step * i as f64;
            let t1 = t0 + step;
            let p0 = point_at(t0);
            let p3 = point_at(t1);
            let c1 = p0 + k * Vec2::from_angle(t0).turn_90();
            let c2 = p3 - k * Vec2::from_angle(t1).turn_90();
            self.cmds.push(PathCmd::CubicTo(c1, c2, p3));
            self.current = p3;
        }
    }

    /// Offset run along the left of `pts`, with a join at every interior
    /// vertex. Assumes the current point is the first vertex's left offset.
    fn side(&mut self, pts: &[Point], dirs: &[Vec2], r: f64, style: &StrokeStyle) {
        for i in 1..dirs.len() {
            self.line_to(pts[i] + r * dirs[i - 1].turn_90());
            self.join(pts[i], dirs[i - 1], dirs[i], r, style);
        }
        let last = dirs.len() - 1;
        self.line_to(pts[pts.len() - 1] + r * dirs[last].turn_90());
    }

    /// Join geometry at vertex `p` between incoming `d0` and outgoing `d1`,
    /// offsetting the left side. Ends at the outgoing left offset.
    fn join(&mut self, p: Point, d0: Vec2, d1: Vec2, r: f64, style: &StrokeStyle) {
        let b = p + r * d1.turn_90();
        let cross = d0.cross(d1);
        let dot = d0.dot(d1);

        if cross.abs() <= COLLINEAR_EPSILON {
            if dot < 0.0 && style.join == Join::Round {
                // A cusp: the spine reverses. The round join bulges a
                // half-disc past the vertex, like a round cap.
                self.arc(p, r, d0.turn_90().atan2(), -PI);
            }
            self.line_to(b);
            return;
        }
        if cross > 0.0 {
            // Inner side of the corner. Route through the spine vertex; the
            // inner offset intersection can spike arbitrarily far for sharp
            // angles and the vertex is always inside the stroke region.
            self.line_to(p);
            self.line_to(b);
            return;
        }
        match style.join {
            Join::Bevel => self.line_to(b),
            Join::Miter => {
                // Miter length is width / sin(phi/2) where phi is the angle
                // between the segments; sin(phi/2) = sqrt((1 + d0.d1) / 2).
                let sin_half = ((1.0 + dot) / 2.0).max(0.0).sqrt();
                let bisector = (d0.turn_90() + d1.turn_90()).normalize();
                match bisector {
                    Some(out) if sin_half > COLLINEAR_EPSILON
                        && 1.0 / sin_half <= style.miter_limit =>
                    {
                        self.line_to(p + (r / sin_half) * out);
                        self.line_to(b);
                    }
                    _ => self.line_to(b),
                }
            }
            Join::Round => {
                let a0 = d0.turn_90().atan2();
                let a1 = d1.turn_90().atan2();
                self.arc(p, r, a0, wrap_angle(a1 - a0));
                self.line_to(b);
            }
        }
    }

    /// Cap at endpoint `p` facing outward along `d_out`, from the left offset
    /// `p + r·turn90(d_out)` to the right offset.
    fn cap(&mut self, p: Point, d_out: Vec2, r: f64, cap: Cap) {
        let n = d_out.turn_90();
        match cap {
            Cap::Butt => {}
            Cap::Square => {
                self.line_to(p + r * n + r * d_out);
                self.line_to(p - r * n + r * d_out);
            }
            Cap::Round => self.arc(p, r, n.atan2(), -PI),
        }
        self.line_to(p - r * n);
    }

    /// One ring around an open subpath: out along the left side, end cap,
    /// back along the other side, start cap.
    fn open_ring(&mut self, pts: &[Point], r: f64, style: &StrokeStyle) {
        let dirs = segment_dirs(pts, false);
        self.move_to(pts[0] + r * dirs[0].turn_90());
        self.side(pts, &dirs, r, style);
        self.cap(pts[pts.len() - 1], dirs[dirs.len() - 1], r, style.cap);

        let mut rev_pts = pts.to_vec();
        rev_pts.reverse();
        let rev_dirs = segment_dirs(&rev_pts, false);
        self.side(&rev_pts, &rev_dirs, r, style);
        self.cap(pts[0], -dirs[0], r, style.cap);
        self.close();
    }

    /// One ring offsetting the left of a closed vertex cycle, with a join at
    /// every vertex including the wrap.
    fn closed_ring(&mut self, pts: &[Point], r: f64, style: &StrokeStyle) {
        let dirs = segment_dirs(pts, true);
        let n = pts.len();
        self.move_to(pts[0] + r * dirs[0].turn_90());
        for i in 1..n {
            self.line_to(pts[i] + r * dirs[i - 1].turn_90());
            self.join(pts[i], dirs[i - 1], dirs[i], r, style);
        }
        self.line_to(pts[0] + r * dirs[n - 1].turn_90());
        self.join(pts[0], dirs[n - 1], dirs[0], r, style);
        self.close();
    }

    /// A subpath that collapsed to a single point: round caps leave a disc,
    /// square caps an axis-aligned square, butt caps nothing.
    fn degenerate_dot(&mut self, p: Point, r: f64, cap: Cap) {
        match cap {
            Cap::Butt => {}
            Cap::Square => {
                self.move_to(Point::new(p.x - r, p.y - r));
                self.line_to(Point::new(p.x + r, p.y - r));
                self.line_to(Point::new(p.x + r, p.y + r));
                self.line_to(Point::new(p.x - r, p.y + r));
                self.close();
            }
            Cap::Round => {
                self.move_to(Point::new(p.x + r, p.y));
                self.arc(p, r, 0.0, TAU);
                self.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::fill_bounds_cmds;
    use crate::flatten::flatten_path;
    use inkbounds_geometry::BoundingBox;
    use inkbounds_path::{Path, PathBuilder};

    fn outline_bounds(path: &Path, style: &StrokeStyle) -> BoundingBox {
        let polys = flatten_path(&path.to_cubics(), 0.01);
        fill_bounds_cmds(&stroke_outline(&polys, style)).expect("non-empty outline")
    }

    fn line_path() -> Path {
        let mut b = PathBuilder::new();
        b.move_to((100.0, 100.0)).line_to((400.0, 100.0));
        b.build().unwrap()
    }

    fn assert_box_near(b: BoundingBox, want: BoundingBox, tol: f64) {
        assert!(
            (b.x0 - want.x0).abs() <= tol
                && (b.y0 - want.y0).abs() <= tol
                && (b.x1 - want.x1).abs() <= tol
                && (b.y1 - want.y1).abs() <= tol,
            "{b:?} != {want:?}"
        );
    }

    #[test]
    fn butt_cap_dilates_only_sideways() {
        let style = StrokeStyle::new(10.0);
        let b = outline_bounds(&line_path(), &style);
        assert_eq!(b, BoundingBox::new(100.0, 95.0, 400.0, 105.0));
    }

    #[test]
    fn square_cap_extends_past_the_endpoints() {
        let style = StrokeStyle::new(10.0).with_cap(Cap::Square);
        let b = outline_bounds(&line_path(), &style);
        assert_eq!(b, BoundingBox::new(95.0, 95.0, 405.0, 105.0));
    }

    #[test]
    fn round_cap_extends_by_the_radius() {
        let style = StrokeStyle::new(10.0).with_cap(Cap::Round);
        let b = outline_bounds(&line_path(), &style);
        // Circular-arc cubics are accurate to well under 1e-3 of the radius.
        assert_box_near(b, BoundingBox::new(95.0, 95.0, 405.0, 105.0), 1e-2);
    }

    #[test]
    fn right_angle_miter_reaches_the_diagonal_tip() {
        let mut p = PathBuilder::new();
        p.move_to((0.0, 0.0)).line_to((100.0, 0.0)).line_to((100.0, 100.0));
        let style = StrokeStyle::new(20.0);
        let b = outline_bounds(&p.build().unwrap(), &style);
        // The miter tip sits at (110, -10); the offset edges already reach
        // x = 110 and y = -10, and the butt caps do not extend the ends.
        assert_box_near(b, BoundingBox::new(0.0, -10.0, 110.0, 100.0), 1e-12);
    }

    #[test]
    fn tight_miter_limit_falls_back_to_bevel() {
        let mut p = PathBuilder::new();
        p.move_to((0.0, 0.0)).line_to((100.0, 0.0)).line_to((100.0, 100.0));
        let path = p.build().unwrap();
        // A right angle has miter ratio sqrt(2); a limit of 1 forces bevel.
        let bevel = outline_bounds(&path, &StrokeStyle::new(20.0).with_miter_limit(1.0));
        let miter = outline_bounds(&path, &StrokeStyle::new(20.0));
        // For a right angle both boxes coincide: the bevel chord endpoints are
        // the offset corners that already span the box. Compare against a
        // sharper turn for a strict difference.
        assert!(miter.contains_box(&bevel));
        let mut sharp = PathBuilder::new();
        sharp.move_to((0.0, 0.0)).line_to((100.0, 0.0)).line_to((0.0, 10.0));
        let sharp = sharp.build().unwrap();
        let miter = outline_bounds(&sharp, &StrokeStyle::new(20.0).with_miter_limit(100.0));
        let bevel = outline_bounds(&sharp, &StrokeStyle::new(20.0).with_miter_limit(1.0));
        assert!(miter.x1 > bevel.x1, "miter {miter:?} must overshoot bevel {bevel:?}");
    }

    #[test]
    fn closed_subpath_strokes_as_two_rings() {
        let mut p = PathBuilder::new();
        p.move_to((0.0, 0.0)).line_to((100.0, 0.0)).line_to((50.0, 80.0)).close();
        let polys = flatten_path(&p.build().unwrap(), 0.01);
        let cmds = stroke_outline(&polys, &StrokeStyle::new(10.0));
        let rings = cmds.iter().filter(|c| matches!(c, PathCmd::MoveTo(_))).count();
        assert_eq!(rings, 2);
        let closes = cmds.iter().filter(|c| matches!(c, PathCmd::Close)).count();
        assert_eq!(closes, 2);
    }

    #[test]
    fn degenerate_dot_follows_the_cap_convention() {
        let mut p = PathBuilder::new();
        p.move_to((50.0, 50.0));
        let path = p.build().unwrap();
        let polys = flatten_path(&path, 0.01);

        let butt = stroke_outline(&polys, &StrokeStyle::new(10.0));
        assert!(butt.is_empty());

        let square = stroke_outline(&polys, &StrokeStyle::new(10.0).with_cap(Cap::Square));
        assert_eq!(
            fill_bounds_cmds(&square),
            Some(BoundingBox::new(45.0, 45.0, 55.0, 55.0))
        );

        let round = stroke_outline(&polys, &StrokeStyle::new(10.0).with_cap(Cap::Round));
        assert_box_near(
            fill_bounds_cmds(&round).unwrap(),
            BoundingBox::new(45.0, 45.0, 55.0, 55.0),
            1e-2,
        );
    }
}
