// Copyright 2026 the Inkbounds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use inkbounds_engine::{BoundsBackend, FastBoundsBackend, OutlineBackend, Scene};
use inkbounds_path::{Cap, Join, PathBuilder, StrokeStyle};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn coord(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

/// A wandering multi-cubic open path with `segments` curve segments.
fn wandering_path(segments: usize, seed: u64) -> inkbounds_path::Path {
    let mut rng = Rng::new(seed);
    let mut b = PathBuilder::with_capacity(segments + 1);
    b.move_to((rng.coord(0.0, 1000.0), rng.coord(0.0, 1000.0)));
    for _ in 0..segments {
        b.cubic_to(
            (rng.coord(0.0, 1000.0), rng.coord(0.0, 1000.0)),
            (rng.coord(0.0, 1000.0), rng.coord(0.0, 1000.0)),
            (rng.coord(0.0, 1000.0), rng.coord(0.0, 1000.0)),
        );
    }
    b.build().expect("generated coordinates are finite")
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_bounds");
    for segments in [4usize, 64, 512] {
        let scene = Scene::fill(wandering_path(segments, 0x1234_5678));
        group.bench_with_input(BenchmarkId::new("outline", segments), &scene, |bench, scene| {
            bench.iter(|| OutlineBackend.compute(black_box(scene)));
        });
        group.bench_with_input(BenchmarkId::new("fast", segments), &scene, |bench, scene| {
            bench.iter(|| FastBoundsBackend.compute(black_box(scene)));
        });
    }
    group.finish();
}

fn bench_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_bounds");
    let style = StrokeStyle::new(24.0).with_join(Join::Round).with_cap(Cap::Round);
    for segments in [4usize, 64, 512] {
        let scene = Scene::stroke(wandering_path(segments, 0x9e37_79b9), style);
        group.bench_with_input(BenchmarkId::new("outline", segments), &scene, |bench, scene| {
            bench.iter(|| OutlineBackend.compute(black_box(scene)));
        });
        group.bench_with_input(BenchmarkId::new("fast", segments), &scene, |bench, scene| {
            bench.iter(|| FastBoundsBackend.compute(black_box(scene)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill, bench_stroke);
criterion_main!(benches);
