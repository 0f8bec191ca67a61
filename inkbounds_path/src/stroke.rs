// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke parameters and the fill/stroke paint selector.

use crate::error::GeometryError;

/// Shape drawn at the open ends of a stroked subpath.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cap {
    /// Cut the stroke off flat at the endpoint.
    #[default]
    Butt,
    /// Extend with a half-disc of the stroke radius.
    Round,
    /// Extend with a half-square of the stroke radius.
    Square,
}

/// Shape drawn where two stroked segments meet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Join {
    /// Extend the outer edges until they meet, subject to the miter limit.
    #[default]
    Miter,
    /// Round the corner with an arc of the stroke radius.
    Round,
    /// Connect the outer edges with a straight chord.
    Bevel,
}

/// How to stroke a path.
///
/// `width` is the full pen diameter; the outline extends `width / 2` to each
/// side of the spine. A zero width is valid and produces no geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Full stroke width (pen diameter).
    pub width: f64,
    /// End cap shape.
    pub cap: Cap,
    /// Corner join shape.
    pub join: Join,
    /// Maximum ratio of miter length to stroke width before a miter join
    /// falls back to bevel.
    pub miter_limit: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: 1.0, cap: Cap::default(), join: Join::default(), miter_limit: 4.0 }
    }
}

impl StrokeStyle {
    /// A stroke of the given width with default cap, join and miter limit.
    pub fn new(width: f64) -> Self {
        Self { width, ..Self::default() }
    }

    /// Builder-style cap setter.
    pub fn with_cap(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }

    /// Builder-style join setter.
    pub fn with_join(mut self, join: Join) -> Self {
        self.join = join;
        self
    }

    /// Builder-style miter limit setter.
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    /// Check the style parameters.
    ///
    /// The width must be finite and non-negative, the miter limit finite and
    /// at least 1 (a miter can never be shorter than the stroke width).
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(GeometryError::InvalidStrokeWidth { width: self.width });
        }
        if !self.miter_limit.is_finite() || self.miter_limit < 1.0 {
            return Err(GeometryError::InvalidMiterLimit { limit: self.miter_limit });
        }
        Ok(())
    }
}

/// Whether a path is painted as a fill or as a stroke.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PaintMode {
    /// The region enclosed by the path.
    Fill,
    /// The region swept by a pen along the path.
    Stroke(StrokeStyle),
}
