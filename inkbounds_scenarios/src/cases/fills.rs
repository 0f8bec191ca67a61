// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::*;
use inkbounds_engine::Scene;

pub(super) fn push(out: &mut Vec<Scenario>) {
    out.push(Scenario {
        name: "fill_rect",
        scene: Scene::fill(rect_path(100.0, 100.0, 400.0, 400.0)),
    });
    // Cubic control points leave the trace on both axes; the bounds must come
    // from the derivative extrema, not the control hull.
    out.push(Scenario {
        name: "fill_winding_curves",
        scene: Scene::fill(winding_path()),
    });
    out.push(Scenario {
        name: "fill_thin_curve",
        scene: Scene::fill(thin_curve()),
    });
    // Arc lowering feeds the same cubic machinery as hand-written curves.
    out.push(Scenario {
        name: "fill_arc_pie",
        scene: Scene::fill(arc_pie_path()),
    });
}
