// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical arc lowering.
//!
//! Converts SVG endpoint-parameterized arcs to center parameterization and
//! emits cubic Bézier segments of at most 90° sweep, following the W3C
//! implementation notes (B.2.4) and the usual `k = 4/3·tan(Δθ/4)` control
//! point rule.

use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, PI};

use inkbounds_geometry::Point;

use crate::path::PathCmd;

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;

/// Append the cubic lowering of one arc to `out`.
///
/// `from` is the current point; callers have already validated that radii are
/// finite and non-zero whenever `from != to`. An arc whose endpoints coincide
/// emits nothing.
pub(crate) fn append_arc_as_cubics(
    out: &mut Vec<PathCmd>,
    from: Point,
    rx: f64,
    ry: f64,
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
    to: Point,
) {
    if from == to {
        return;
    }
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    debug_assert!(rx > 0.0 && ry > 0.0, "zero radii rejected at validation");

    let (sin_phi, cos_phi) = x_rotation.sin_cos();

    // Transform to the frame centered on the chord midpoint with axes aligned
    // to the ellipse.
    let mid_x = (from.x - to.x) / 2.0;
    let mid_y = (from.y - to.y) / 2.0;
    let x1p = cos_phi * mid_x + sin_phi * mid_y;
    let y1p = -sin_phi * mid_x + cos_phi * mid_y;

    // Scale the radii up if no ellipse of the requested size can reach both
    // endpoints.
    let lambda = (x1p / rx) * (x1p / rx) + (y1p / ry) * (y1p / ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let d = (rx * y1p) * (rx * y1p) + (ry * x1p) * (ry * x1p);
    if d == 0.0 {
        return;
    }
    let mut k = ((rx * ry) * (rx * ry) / d - 1.0).abs().sqrt();
    if sweep == large_arc {
        k = -k;
    }
    let cxp = k * rx * y1p / ry;
    let cyp = -k * ry * x1p / rx;

    let cx = cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0;

    // Start angle and signed sweep.
    let ux = (x1p - cxp) / rx;
    let uy = (y1p - cyp) / ry;
    let u_len = (ux * ux + uy * uy).sqrt();
    if u_len == 0.0 {
        return;
    }
    let mut theta1 = (ux / u_len).clamp(-1.0, 1.0).acos();
    if uy < 0.0 {
        theta1 = -theta1;
    }

    let vx = (-x1p - cxp) / rx;
    let vy = (-y1p - cyp) / ry;
    let v_len = (vx * vx + vy * vy).sqrt();
    if v_len == 0.0 {
        return;
    }
    let mut delta = ((ux * vx + uy * vy) / (u_len * v_len)).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 {
        delta = -delta;
    }
    if sweep && delta < 0.0 {
        delta += 2.0 * PI;
    } else if !sweep && delta > 0.0 {
        delta -= 2.0 * PI;
    }

    // Split into sweeps of at most 90°.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "segment count is at most 4 for a full turn"
    )]
    let segments = ((delta.abs() / FRAC_PI_2).ceil() as usize).max(1);

    let eval = |theta: f64| -> Point {
        let (sin_t, cos_t) = theta.sin_cos();
        Point::new(
            cx + rx * cos_t * cos_phi - ry * sin_t * sin_phi,
            cy + rx * cos_t * sin_phi + ry * sin_t * cos_phi,
        )
    };
    let derivative = |theta: f64| -> (f64, f64) {
        let (sin_t, cos_t) = theta.sin_cos();
        (
            -rx * sin_t * cos_phi - ry * cos_t * sin_phi,
            -rx * sin_t * sin_phi + ry * cos_t * cos_phi,
        )
    };

    let step = delta / segments as f64;
    for i in 0..segments {
        let th_a = theta1 + step * i as f64;
        let th_b = th_a + step;
        let t = (4.0 / 3.0) * (step / 4.0).tan();

        let p0 = eval(th_a);
        let (dax, day) = derivative(th_a);
        let c1 = Point::new(p0.x + t * dax, p0.y + t * day);

        // Pin the final endpoint exactly; the parameterization already lands
        // there up to rounding.
        let p3 = if i + 1 == segments { to } else { eval(th_b) };
        let (dbx, dby) = derivative(th_b);
        let c2 = Point::new(p3.x - t * dbx, p3.y - t * dby);

        out.push(PathCmd::CubicTo(c1, c2, p3));
    }
}
