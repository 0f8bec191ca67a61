// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental path construction.

use alloc::vec::Vec;

use inkbounds_geometry::Point;

use crate::error::GeometryError;
use crate::path::{Path, PathCmd};

/// Accumulates drawing commands and validates them into a [`Path`].
///
/// The builder records commands verbatim; all validation happens in
/// [`PathBuilder::build`], so a malformed sequence is reported with the index
/// of the first offending command rather than panicking mid-construction.
///
/// ```
/// use inkbounds_geometry::Point;
/// use inkbounds_path::PathBuilder;
///
/// let mut b = PathBuilder::new();
/// b.move_to(Point::new(0.0, 0.0));
/// b.line_to(Point::new(10.0, 0.0));
/// b.line_to(Point::new(10.0, 10.0));
/// b.close();
/// let path = b.build().unwrap();
/// assert_eq!(path.commands().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    cmds: Vec<PathCmd>,
}

impl PathBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { cmds: Vec::with_capacity(capacity) }
    }

    /// Begin a new subpath at `p`.
    pub fn move_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(p.into()));
        self
    }

    /// Draw a line from the current point to `p`.
    pub fn line_to(&mut self, p: impl Into<Point>) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(p.into()));
        self
    }

    /// Draw a cubic Bézier from the current point.
    pub fn cubic_to(
        &mut self,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        p: impl Into<Point>,
    ) -> &mut Self {
        self.cmds.push(PathCmd::CubicTo(c1.into(), c2.into(), p.into()));
        self
    }

    /// Draw an elliptical arc from the current point, in SVG endpoint
    /// parameterization. `x_rotation` is in radians.
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: impl Into<Point>,
    ) -> &mut Self {
        self.cmds.push(PathCmd::ArcTo {
            rx,
            ry,
            x_rotation,
            large_arc,
            sweep,
            to: to.into(),
        });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    /// Number of commands recorded so far.
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// Returns `true` if no commands have been recorded.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Validate the recorded commands into a [`Path`].
    pub fn build(self) -> Result<Path, GeometryError> {
        Path::from_commands(self.cmds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_valid_path() {
        let mut b = PathBuilder::new();
        b.move_to((1.0, 2.0)).line_to((3.0, 4.0)).close();
        let path = b.build().expect("valid sequence");
        assert_eq!(
            path.commands(),
            &[
                PathCmd::MoveTo(Point::new(1.0, 2.0)),
                PathCmd::LineTo(Point::new(3.0, 4.0)),
                PathCmd::Close,
            ]
        );
    }

    #[test]
    fn build_reports_the_first_invalid_command() {
        let mut b = PathBuilder::new();
        b.line_to((1.0, 1.0));
        b.move_to((0.0, 0.0));
        let err = b.build().expect_err("line before move");
        assert_eq!(err, GeometryError::MissingMoveTo { index: 0 });
    }

    #[test]
    fn empty_builder_builds_the_empty_path() {
        let path = PathBuilder::new().build().expect("empty is valid");
        assert!(path.is_empty());
    }
}
