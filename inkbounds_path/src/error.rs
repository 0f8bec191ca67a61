// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rejection taxonomy for malformed geometry.

use core::fmt;

/// Why a path or stroke description was rejected.
///
/// All variants are construction-time (or style-validation-time) failures;
/// computation itself is deterministic and does not fail transiently.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A coordinate or arc parameter is NaN or infinite.
    NonFiniteCoordinate {
        /// Index of the offending command.
        index: usize,
    },
    /// A drawing command appeared where no subpath is open (before the first
    /// `MoveTo`, or directly after a `Close`).
    MissingMoveTo {
        /// Index of the offending command.
        index: usize,
    },
    /// An arc has a zero radius but distinct endpoints, so no ellipse can
    /// connect them.
    InvalidArcRadii {
        /// Index of the offending command.
        index: usize,
    },
    /// A scene transform has a NaN or infinite coefficient.
    NonFiniteTransform,
    /// A stroke width is negative or non-finite.
    InvalidStrokeWidth {
        /// The rejected width.
        width: f64,
    },
    /// A miter limit is below 1 or non-finite.
    InvalidMiterLimit {
        /// The rejected limit.
        limit: f64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate { index } => {
                write!(f, "non-finite coordinate in command {index}")
            }
            Self::MissingMoveTo { index } => {
                write!(f, "command {index} starts a subpath without MoveTo")
            }
            Self::InvalidArcRadii { index } => {
                write!(f, "arc command {index} has a zero radius but distinct endpoints")
            }
            Self::NonFiniteTransform => {
                write!(f, "non-finite transform coefficient")
            }
            Self::InvalidStrokeWidth { width } => {
                write!(f, "invalid stroke width {width}")
            }
            Self::InvalidMiterLimit { limit } => {
                write!(f, "invalid miter limit {limit} (must be >= 1)")
            }
        }
    }
}

impl core::error::Error for GeometryError {}
