//! Criterion benchmarks for ordering, area, and containment.
//! Focus sizes: n in {8, 64, 512, 4096} traced points.

use canvas_area::prelude::*;
use canvas_area::rand::{draw_trace, ReplayToken, TraceCfg, VertexCount};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn trace(n: usize, seed: u64) -> Vec<Point> {
    let cfg = TraceCfg {
        vertex_count: VertexCount::Fixed(n),
        ..TraceCfg::default()
    };
    draw_trace(cfg, ReplayToken { seed, index: 0 })
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    for &n in &[8usize, 64, 512, 4096] {
        group.bench_with_input(BenchmarkId::new("order_angular", n), &n, |b, &n| {
            b.iter_batched(
                || trace(n, 41),
                |mut pts| order_angular(&mut pts),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("raw_area", n), &n, |b, &n| {
            let mut pts = trace(n, 42);
            order_angular(&mut pts);
            b.iter(|| raw_area(&pts))
        });

        group.bench_with_input(BenchmarkId::new("is_inside", n), &n, |b, &n| {
            let mut pts = trace(n, 43);
            order_angular(&mut pts);
            let q = Point::new(400.0, 300.0);
            b.iter(|| is_inside(q, &pts))
        });

        group.bench_with_input(BenchmarkId::new("session_area", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut s = MeasureSession::new();
                    s.import_points(trace(n, 44).iter().map(|p| [p.x, p.y]));
                    s.set_reference_segment(Axis::Horizontal, 0.0, 0.0, 100.0, 0.0, 1.0);
                    s.commit_reference_segment(Axis::Horizontal);
                    s.set_reference_segment(Axis::Vertical, 0.0, 0.0, 0.0, 100.0, 1.0);
                    s.commit_reference_segment(Axis::Vertical);
                    s
                },
                |mut s| s.compute_calibrated_area(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_measure);
criterion_main!(benches);
