// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::*;
use inkbounds_engine::Scene;
use inkbounds_path::{Cap, Join, StrokeStyle};

pub(super) fn push(out: &mut Vec<Scenario>) {
    let rect = rect_path(100.0, 100.0, 400.0, 400.0);
    // Right angles at miter limit 4: all four corners get full miter tips.
    out.push(Scenario {
        name: "stroke_rect_miter",
        scene: Scene::stroke(rect.clone(), StrokeStyle::new(40.0)),
    });
    out.push(Scenario {
        name: "stroke_rect_round",
        scene: Scene::stroke(
            rect,
            StrokeStyle::new(40.0).with_join(Join::Round).with_cap(Cap::Round),
        ),
    });

    let winding = winding_path();
    out.push(Scenario {
        name: "stroke_winding_bevel",
        scene: Scene::stroke(winding.clone(), StrokeStyle::new(50.0).with_join(Join::Bevel)),
    });
    out.push(Scenario {
        name: "stroke_winding_round",
        scene: Scene::stroke(
            winding.clone(),
            StrokeStyle::new(50.0).with_join(Join::Round).with_cap(Cap::Round),
        ),
    });
    // A generous limit keeps the sharp joins mitered.
    out.push(Scenario {
        name: "stroke_winding_thin_miter",
        scene: Scene::stroke(winding, StrokeStyle::new(20.0).with_miter_limit(10.0)),
    });

    let thin = thin_curve();
    for (name, cap) in [
        ("stroke_thin_curve_butt", Cap::Butt),
        ("stroke_thin_curve_square", Cap::Square),
        ("stroke_thin_curve_round", Cap::Round),
    ] {
        out.push(Scenario {
            name,
            scene: Scene::stroke(thin.clone(), StrokeStyle::new(40.0).with_cap(cap)),
        });
    }

    out.push(Scenario {
        name: "stroke_arc_pie_round",
        scene: Scene::stroke(
            arc_pie_path(),
            StrokeStyle::new(16.0).with_join(Join::Round).with_cap(Cap::Round),
        ),
    });

    // The spine doubles back on itself: a cusp rather than a corner.
    let mut cusp = PathBuilder::new();
    cusp.move_to((100.0, 100.0)).line_to((300.0, 100.0)).line_to((180.0, 100.0));
    out.push(Scenario {
        name: "stroke_cusp_round",
        scene: Scene::stroke(
            cusp.build().expect("battery scene is valid"),
            StrokeStyle::new(30.0).with_join(Join::Round),
        ),
    });
}
