// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::*;
use inkbounds_engine::Scene;
use inkbounds_path::StrokeStyle;

/// Clip and content are mirrored lobes: each curve's extremum reaches into
/// the other's box, so the intersection is strictly smaller than either.
fn lobes() -> (Path, Path) {
    let mut clip = PathBuilder::new();
    clip.move_to((100.0, 100.0)).cubic_to((700.0, 100.0), (700.0, 500.0), (100.0, 500.0)).close();
    let mut content = PathBuilder::new();
    content
        .move_to((700.0, 100.0))
        .cubic_to((100.0, 100.0), (100.0, 500.0), (700.0, 500.0))
        .close();
    (
        clip.build().expect("battery scene is valid"),
        content.build().expect("battery scene is valid"),
    )
}

pub(super) fn push(out: &mut Vec<Scenario>) {
    let (clip, content) = lobes();
    out.push(Scenario {
        name: "clip_curved_lobes",
        scene: Scene::fill(content).with_clip(clip.clone()),
    });
    out.push(Scenario {
        name: "clip_of_stroke",
        scene: Scene::stroke(thin_curve(), StrokeStyle::new(40.0)).with_clip(clip),
    });
    out.push(Scenario {
        name: "clip_disjoint",
        scene: Scene::fill(rect_path(0.0, 0.0, 50.0, 50.0))
            .with_clip(rect_path(1000.0, 1000.0, 1100.0, 1100.0)),
    });
}
