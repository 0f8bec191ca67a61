// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scenario battery.

use inkbounds_path::{Path, PathBuilder};

use crate::Scenario;

mod clips;
mod degenerate;
mod fills;
mod strokes;
mod transforms;

/// Every scenario in the battery, in a stable order.
pub fn scenarios() -> Vec<Scenario> {
    let mut out = Vec::new();
    fills::push(&mut out);
    strokes::push(&mut out);
    transforms::push(&mut out);
    clips::push(&mut out);
    degenerate::push(&mut out);
    out
}

/// The battery, filtered by the `INKBOUNDS_CASE` environment variable when
/// set (comma/whitespace-separated `*` globs).
pub fn selected_scenarios() -> Vec<Scenario> {
    let all = scenarios();
    match case_filters() {
        None => all,
        Some(filters) => all
            .into_iter()
            .filter(|s| filters.iter().any(|p| matches_glob(p, s.name)))
            .collect(),
    }
}

/// A scenario by name, for tests that pin expected boxes.
///
/// # Panics
///
/// Panics when no scenario has that name.
pub fn scenario(name: &str) -> Scenario {
    scenarios()
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no scenario named {name}"))
}

fn matches_glob(pattern: &str, text: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == text;
    }
    let mut rest = text;
    let parts: Vec<&str> = pattern.split('*').collect();
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        match rest.find(part) {
            Some(idx) => {
                if i == 0 && idx != 0 {
                    return false;
                }
                rest = &rest[idx + part.len()..];
            }
            None => return false,
        }
    }
    pattern.ends_with('*') || rest.is_empty()
}

fn case_filters() -> Option<Vec<String>> {
    let raw = std::env::var("INKBOUNDS_CASE").ok()?;
    let filters: Vec<String> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if filters.is_empty() { None } else { Some(filters) }
}

/// Axis-aligned rectangle, closed.
pub(crate) fn rect_path(x0: f64, y0: f64, x1: f64, y1: f64) -> Path {
    let mut b = PathBuilder::new();
    b.move_to((x0, y0)).line_to((x1, y0)).line_to((x1, y1)).line_to((x0, y1)).close();
    b.build().expect("battery scene is valid")
}

/// A winding multi-cubic shape whose control points overshoot its trace on
/// both axes.
pub(crate) fn winding_path() -> Path {
    let mut b = PathBuilder::new();
    b.move_to((100.0, 100.0))
        .line_to((400.0, 100.0))
        .cubic_to((800.0, 100.0), (800.0, 400.0), (400.0, 400.0))
        .line_to((800.0, 400.0))
        .cubic_to((400.0, 400.0), (400.0, 800.0), (800.0, 800.0))
        .cubic_to((800.0, 900.0), (100.0, 900.0), (100.0, 800.0))
        .close();
    b.build().expect("battery scene is valid")
}

/// A short open cubic whose trace stays close to a horizontal line.
pub(crate) fn thin_curve() -> Path {
    let mut b = PathBuilder::new();
    b.move_to((100.0, 500.0)).cubic_to((300.0, 400.0), (300.0, 600.0), (400.0, 500.0));
    b.build().expect("battery scene is valid")
}

/// A pie slice built from a large elliptical arc, closed back to the start.
pub(crate) fn arc_pie_path() -> Path {
    let mut b = PathBuilder::new();
    b.move_to((100.0, 100.0)).arc_to(50.0, 100.0, 0.0, true, true, (100.0, 280.0)).close();
    b.build().expect("battery scene is valid")
}

/// The square that the transform scenarios rotate about its own center.
pub(crate) fn centered_square() -> Path {
    rect_path(400.0, 400.0, 600.0, 600.0)
}
