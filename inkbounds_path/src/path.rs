// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path commands and the validated, immutable path value.

use alloc::sync::Arc;
use alloc::vec::Vec;

use inkbounds_geometry::Point;

use crate::arc::append_arc_as_cubics;
use crate::error::GeometryError;

/// A single path drawing command.
///
/// Coordinates are absolute, in document units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCmd {
    /// Begin a new subpath at the given point.
    MoveTo(Point),
    /// Draw a line from the current point.
    LineTo(Point),
    /// Draw a cubic Bézier from the current point, with two control points
    /// and an endpoint.
    CubicTo(Point, Point, Point),
    /// Draw an elliptical arc from the current point, in SVG endpoint
    /// parameterization.
    ArcTo {
        /// X-axis radius of the ellipse.
        rx: f64,
        /// Y-axis radius of the ellipse.
        ry: f64,
        /// Rotation of the ellipse's x-axis, in radians.
        x_rotation: f64,
        /// Select the sweep of 180° or more.
        large_arc: bool,
        /// Select the positive-angle sweep direction.
        sweep: bool,
        /// Arc endpoint.
        to: Point,
    },
    /// Close the current subpath with a line back to its starting point.
    Close,
}

impl PathCmd {
    /// Returns `true` if every coordinate and parameter is finite.
    fn is_finite(&self) -> bool {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => p.is_finite(),
            Self::CubicTo(c1, c2, p) => c1.is_finite() && c2.is_finite() && p.is_finite(),
            Self::ArcTo { rx, ry, x_rotation, to, .. } => {
                rx.is_finite() && ry.is_finite() && x_rotation.is_finite() && to.is_finite()
            }
            Self::Close => true,
        }
    }
}

/// An immutable, validated sequence of [`PathCmd`]s.
///
/// Zero or more subpaths, each beginning with `MoveTo`. The command buffer is
/// `Arc`-backed, so cloning a path into a long-lived scene is cheap.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    cmds: Arc<[PathCmd]>,
}

impl Path {
    /// An empty path.
    pub fn empty() -> Self {
        Self { cmds: Arc::from([]) }
    }

    /// Validate a command sequence into a path.
    ///
    /// See the crate docs for the validation invariants.
    pub fn from_commands(cmds: impl Into<Vec<PathCmd>>) -> Result<Self, GeometryError> {
        let cmds = cmds.into();
        let mut current: Option<Point> = None;
        for (index, cmd) in cmds.iter().enumerate() {
            if !cmd.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { index });
            }
            match *cmd {
                PathCmd::MoveTo(p) => current = Some(p),
                PathCmd::LineTo(p) | PathCmd::CubicTo(_, _, p) => {
                    if current.is_none() {
                        return Err(GeometryError::MissingMoveTo { index });
                    }
                    current = Some(p);
                }
                PathCmd::ArcTo { rx, ry, to, .. } => {
                    let Some(from) = current else {
                        return Err(GeometryError::MissingMoveTo { index });
                    };
                    // A zero radius cannot connect distinct endpoints; an arc
                    // whose endpoints coincide lowers to nothing and is fine.
                    if (rx == 0.0 || ry == 0.0) && from != to {
                        return Err(GeometryError::InvalidArcRadii { index });
                    }
                    current = Some(to);
                }
                PathCmd::Close => {
                    if current.is_none() {
                        return Err(GeometryError::MissingMoveTo { index });
                    }
                    // The next command must open a fresh subpath.
                    current = None;
                }
            }
        }
        Ok(Self { cmds: cmds.into() })
    }

    /// Construct from commands already known to satisfy the invariants.
    pub(crate) fn from_commands_unchecked(cmds: Vec<PathCmd>) -> Self {
        Self { cmds: cmds.into() }
    }

    /// The command sequence.
    #[inline]
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Returns `true` if the path has no commands at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Returns `true` if the path contains any `ArcTo` command.
    #[inline]
    pub fn has_arcs(&self) -> bool {
        self.cmds.iter().any(|c| matches!(c, PathCmd::ArcTo { .. }))
    }

    /// Lower every elliptical arc into cubic Bézier segments.
    ///
    /// Arcs are split into sweeps of at most 90° so the standard cubic
    /// approximation stays well under 0.1% of the radius. Paths without arcs
    /// are returned as a cheap clone.
    pub fn to_cubics(&self) -> Self {
        if !self.has_arcs() {
            return self.clone();
        }
        let mut out = Vec::with_capacity(self.cmds.len() + 8);
        let mut current = Point::ORIGIN;
        for cmd in self.cmds.iter() {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => {
                    current = p;
                    out.push(*cmd);
                }
                PathCmd::CubicTo(_, _, p) => {
                    current = p;
                    out.push(*cmd);
                }
                PathCmd::ArcTo { rx, ry, x_rotation, large_arc, sweep, to } => {
                    append_arc_as_cubics(
                        &mut out, current, rx, ry, x_rotation, large_arc, sweep, to,
                    );
                    current = to;
                }
                PathCmd::Close => out.push(PathCmd::Close),
            }
        }
        // Lowering preserves the construction invariants: subpath structure is
        // untouched and all emitted coordinates are finite.
        Self::from_commands_unchecked(out)
    }
}
