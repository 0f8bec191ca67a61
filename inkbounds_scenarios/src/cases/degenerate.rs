// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::*;
use inkbounds_engine::Scene;
use inkbounds_path::{Cap, Path, StrokeStyle};

pub(super) fn push(out: &mut Vec<Scenario>) {
    out.push(Scenario {
        name: "degenerate_empty_path_fill",
        scene: Scene::fill(Path::empty()),
    });
    out.push(Scenario {
        name: "degenerate_zero_width_stroke",
        scene: Scene::stroke(rect_path(100.0, 100.0, 400.0, 400.0), StrokeStyle::new(0.0)),
    });

    let mut dot = PathBuilder::new();
    dot.move_to((250.0, 250.0));
    let dot = dot.build().expect("battery scene is valid");
    for (name, cap) in [
        ("degenerate_dot_butt", Cap::Butt),
        ("degenerate_dot_square", Cap::Square),
        ("degenerate_dot_round", Cap::Round),
    ] {
        out.push(Scenario {
            name,
            scene: Scene::stroke(dot.clone(), StrokeStyle::new(24.0).with_cap(cap)),
        });
    }

    // A single anchor still has a location: fill bounds are a zero-area box,
    // not the empty sentinel.
    out.push(Scenario {
        name: "degenerate_dot_fill",
        scene: Scene::fill(dot),
    });
}
