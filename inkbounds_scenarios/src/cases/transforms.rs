// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::*;
use inkbounds_engine::Scene;
use inkbounds_geometry::{Affine, Point};
use inkbounds_path::{Cap, Join, StrokeStyle};

pub(super) fn push(out: &mut Vec<Scenario>) {
    let spin = Affine::rotate_about(core::f64::consts::FRAC_PI_4, Point::new(500.0, 500.0));
    // Corner projection has to grow the box to the square's diagonal.
    out.push(Scenario {
        name: "transform_rotated_square_fill",
        scene: Scene::fill(centered_square()).with_transform(spin),
    });
    out.push(Scenario {
        name: "transform_rotated_square_stroke_round",
        scene: Scene::stroke(
            centered_square(),
            StrokeStyle::new(20.0).with_join(Join::Round).with_cap(Cap::Round),
        )
        .with_transform(spin),
    });
    // Pure translation must shift the box exactly, with no inflation.
    out.push(Scenario {
        name: "transform_translated_rect_fill",
        scene: Scene::fill(rect_path(100.0, 100.0, 400.0, 400.0))
            .with_transform(Affine::translate((7.5, -3.25))),
    });
    out.push(Scenario {
        name: "transform_scaled_winding_stroke",
        scene: Scene::stroke(winding_path(), StrokeStyle::new(50.0).with_join(Join::Bevel))
            .with_transform(Affine::scale_non_uniform(0.5, 2.0)),
    });
}
