// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkbounds Engine: tight axis-aligned bounding boxes for vector paths.
//!
//! The engine answers one question: given a path, a paint mode (fill or
//! stroke), an affine transform and an optional clip, what is the tight
//! axis-aligned box around the ink the scene would produce? "No ink at all"
//! is a distinguishable result (`Ok(None)`), never a zero-sized box, and
//! malformed geometry is rejected with a [`GeometryError`] rather than
//! coerced.
//!
//! Two independent strategies implement the [`BoundsBackend`] trait:
//!
//! - [`OutlineBackend`] constructs the actual stroke outline (offset sides,
//!   joins, caps) as a path and takes its fill bounds via cubic extrema.
//! - [`FastBoundsBackend`] never builds geometry: it folds offset corners,
//!   miter tips and analytic arc extremes straight into an accumulator.
//!
//! Both offset the same flattened spine, so they agree to within the
//! flattening tolerance; disagreement beyond that indicates a bug in one of
//! them, which is what the scenario battery in the companion test crate
//! checks.
//!
//! ```
//! use inkbounds_engine::{BoundsBackend, OutlineBackend, Scene};
//! use inkbounds_path::PathBuilder;
//!
//! let mut b = PathBuilder::new();
//! b.move_to((100.0, 100.0)).line_to((400.0, 100.0)).line_to((400.0, 400.0)).close();
//! let scene = Scene::fill(b.build().unwrap());
//! let bounds = OutlineBackend.compute(&scene).unwrap().unwrap();
//! assert_eq!((bounds.x0, bounds.y1), (100.0, 400.0));
//! ```
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
compile_error!("inkbounds_engine requires either the `std` or `libm` feature");

mod fill;
mod flatten;
mod float;
mod stroke_exact;
mod stroke_fast;

pub use fill::fill_bounds;

use inkbounds_geometry::{Affine, BoundingBox};
use inkbounds_path::{GeometryError, PaintMode, Path, StrokeStyle};

/// Curves are flattened to within this distance of the true curve before
/// offsetting. Both strategies share it, so flattening error is common-mode
/// in any cross-backend comparison.
const FLATTEN_TOLERANCE: f64 = 0.01;

/// Everything that determines where ink lands: a path, how it is painted,
/// where it is placed, and what clips it.
///
/// The clip path is expressed in the same coordinate space as the content
/// path and is carried through the same transform.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The path to paint.
    pub path: Path,
    /// Fill or stroke.
    pub paint: PaintMode,
    /// Placement of path and clip in device space.
    pub transform: Affine,
    /// Restricts ink to the clip path's fill region.
    pub clip: Option<Path>,
}

impl Scene {
    /// A filled path with identity transform and no clip.
    pub fn fill(path: Path) -> Self {
        Self { path, paint: PaintMode::Fill, transform: Affine::IDENTITY, clip: None }
    }

    /// A stroked path with identity transform and no clip.
    pub fn stroke(path: Path, style: StrokeStyle) -> Self {
        Self { path, paint: PaintMode::Stroke(style), transform: Affine::IDENTITY, clip: None }
    }

    /// Builder-style transform setter.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Builder-style clip setter.
    #[must_use]
    pub fn with_clip(mut self, clip: Path) -> Self {
        self.clip = Some(clip);
        self
    }

    /// The scene's device-space bounds, computed with the outline strategy.
    pub fn bounds(&self) -> Result<Option<BoundingBox>, GeometryError> {
        OutlineBackend.compute(self)
    }
}

/// A strategy for computing scene bounds.
///
/// Implementations must be deterministic: the same scene yields bit-identical
/// results on every call.
pub trait BoundsBackend {
    /// Strategy name, for diagnostics.
    fn name(&self) -> &'static str;

    /// The device-space bounds of the scene's ink, `Ok(None)` when the scene
    /// produces no ink at all.
    fn compute(&self, scene: &Scene) -> Result<Option<BoundingBox>, GeometryError>;
}

/// Computes stroke bounds by constructing the stroke outline and taking its
/// fill bounds; fill bounds come from exact cubic extrema.
#[derive(Copy, Clone, Debug, Default)]
pub struct OutlineBackend;

impl BoundsBackend for OutlineBackend {
    fn name(&self) -> &'static str {
        "outline"
    }

    fn compute(&self, scene: &Scene) -> Result<Option<BoundingBox>, GeometryError> {
        validate(scene)?;
        let local = match scene.paint {
            PaintMode::Fill => fill::fill_bounds(&scene.path),
            PaintMode::Stroke(style) if style.width == 0.0 => None,
            PaintMode::Stroke(style) => {
                let polys = flatten::flatten_path(&scene.path.to_cubics(), FLATTEN_TOLERANCE);
                fill::fill_bounds_cmds(&stroke_exact::stroke_outline(&polys, &style))
            }
        };
        Ok(place(scene, local))
    }
}

/// Computes stroke bounds by folding extreme points straight into an
/// accumulator (offset corners, miter tips and analytic arc extremes) without
/// constructing outline geometry; fill bounds come from exact cubic extrema.
#[derive(Copy, Clone, Debug, Default)]
pub struct FastBoundsBackend;

impl BoundsBackend for FastBoundsBackend {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn compute(&self, scene: &Scene) -> Result<Option<BoundingBox>, GeometryError> {
        validate(scene)?;
        let local = match scene.paint {
            // Flattened vertices lie on the curve, so a box built from them
            // could exclude ink at an extremum between vertices. Fill bounds
            // must never be tighter than the ink; the extrema computation is
            // cheap enough to share.
            PaintMode::Fill => fill::fill_bounds(&scene.path),
            PaintMode::Stroke(style) if style.width == 0.0 => None,
            PaintMode::Stroke(style) => {
                let polys = flatten::flatten_path(&scene.path.to_cubics(), FLATTEN_TOLERANCE);
                stroke_fast::fast_stroke_bounds(&polys, &style)
            }
        };
        Ok(place(scene, local))
    }
}

fn validate(scene: &Scene) -> Result<(), GeometryError> {
    if !scene.transform.is_finite() {
        return Err(GeometryError::NonFiniteTransform);
    }
    if let PaintMode::Stroke(style) = &scene.paint {
        style.validate()?;
    }
    Ok(())
}

/// Map local bounds to device space and intersect with the clip's bounds.
fn place(scene: &Scene, local: Option<BoundingBox>) -> Option<BoundingBox> {
    let device = scene.transform.transform_bbox(local?);
    match &scene.clip {
        None => Some(device),
        Some(clip) => {
            let clip_box = scene.transform.transform_bbox(fill::fill_bounds(clip)?);
            device.intersect(&clip_box)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkbounds_geometry::Point;
    use inkbounds_path::{Cap, PathBuilder};

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
        let mut b = PathBuilder::new();
        b.move_to((x0, y0)).line_to((x1, y0)).line_to((x1, y1)).line_to((x0, y1)).close();
        b.build().unwrap()
    }

    #[test]
    fn empty_path_yields_no_bounds_not_a_zero_box() {
        let scene = Scene::fill(Path::empty());
        assert_eq!(OutlineBackend.compute(&scene).unwrap(), None);
        assert_eq!(FastBoundsBackend.compute(&scene).unwrap(), None);
    }

    #[test]
    fn zero_width_stroke_produces_no_ink() {
        let scene = Scene::stroke(rect(0.0, 0.0, 10.0, 10.0), StrokeStyle::new(0.0));
        assert_eq!(OutlineBackend.compute(&scene).unwrap(), None);
        assert_eq!(FastBoundsBackend.compute(&scene).unwrap(), None);
    }

    #[test]
    fn non_finite_transform_is_rejected() {
        let scene = Scene::fill(rect(0.0, 0.0, 1.0, 1.0))
            .with_transform(Affine::new([1.0, 0.0, 0.0, f64::NAN, 0.0, 0.0]));
        assert_eq!(
            OutlineBackend.compute(&scene),
            Err(GeometryError::NonFiniteTransform)
        );
    }

    #[test]
    fn invalid_stroke_style_is_rejected_before_computation() {
        let scene = Scene::stroke(rect(0.0, 0.0, 1.0, 1.0), StrokeStyle::new(-1.0));
        assert_eq!(
            FastBoundsBackend.compute(&scene),
            Err(GeometryError::InvalidStrokeWidth { width: -1.0 })
        );
    }

    #[test]
    fn disjoint_clip_empties_the_result() {
        let scene = Scene::fill(rect(0.0, 0.0, 10.0, 10.0)).with_clip(rect(100.0, 100.0, 110.0, 110.0));
        assert_eq!(OutlineBackend.compute(&scene).unwrap(), None);
        assert_eq!(FastBoundsBackend.compute(&scene).unwrap(), None);
    }

    #[test]
    fn clip_trims_the_content_bounds() {
        let scene = Scene::fill(rect(0.0, 0.0, 10.0, 10.0)).with_clip(rect(5.0, -5.0, 20.0, 5.0));
        let b = scene.bounds().unwrap().unwrap();
        assert_eq!(b, BoundingBox::new(5.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn clip_rides_the_scene_transform() {
        // Content and clip shift together; the intersection shifts with them.
        let scene = Scene::fill(rect(0.0, 0.0, 10.0, 10.0))
            .with_clip(rect(5.0, 0.0, 20.0, 10.0))
            .with_transform(Affine::translate((100.0, 0.0)));
        let b = scene.bounds().unwrap().unwrap();
        assert_eq!(b, BoundingBox::new(105.0, 0.0, 110.0, 10.0));
    }

    #[test]
    fn transform_projects_corners_not_extents() {
        use core::f64::consts::FRAC_PI_4;
        let scene = Scene::fill(rect(400.0, 400.0, 600.0, 600.0))
            .with_transform(Affine::rotate_about(FRAC_PI_4, Point::new(500.0, 500.0)));
        let b = scene.bounds().unwrap().unwrap();
        let half_diag = 100.0 * core::f64::consts::SQRT_2;
        assert!((b.x0 - (500.0 - half_diag)).abs() < 1e-9);
        assert!((b.x1 - (500.0 + half_diag)).abs() < 1e-9);
    }

    #[test]
    fn fast_fill_bounds_cover_curve_extrema() {
        // An asymmetric arch whose y extremum lands between flattening
        // vertices; the reported box must still cover it.
        let mut b = PathBuilder::new();
        b.move_to((0.0, 0.0)).cubic_to((90.0, -310.0), (800.0, -40.0), (1200.0, 0.0));
        let scene = Scene::fill(b.build().unwrap());
        let fast = FastBoundsBackend.compute(&scene).unwrap().unwrap();
        assert!(fast.y0 <= -147.10519025839494, "extremum excluded: {fast:?}");
        assert_eq!(OutlineBackend.compute(&scene).unwrap(), Some(fast));
    }

    #[test]
    fn backends_are_deterministic() {
        let mut b = PathBuilder::new();
        b.move_to((100.0, 500.0)).cubic_to((300.0, 400.0), (300.0, 600.0), (400.0, 500.0));
        let scene = Scene::stroke(
            b.build().unwrap(),
            StrokeStyle::new(40.0).with_cap(Cap::Round),
        );
        for backend in [&OutlineBackend as &dyn BoundsBackend, &FastBoundsBackend] {
            let first = backend.compute(&scene).unwrap().unwrap();
            for _ in 0..3 {
                let again = backend.compute(&scene).unwrap().unwrap();
                assert_eq!(first, again, "{} backend drifted", backend.name());
            }
        }
    }
}
