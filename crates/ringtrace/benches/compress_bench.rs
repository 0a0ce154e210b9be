//! Criterion benchmarks for contour compression and materialization.
//! Focus sizes: extent in {64, 256, 1024, 4096} pixels (dense ring length grows linearly).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ringtrace::contour::rand::{draw_traced_contour, CornerCount, ReplayToken, TraceCfg};
use ringtrace::Contour;

fn traced(extent: u32, seed: u64) -> Contour {
    let cfg = TraceCfg {
        corners: CornerCount::Fixed(16),
        extent,
        ..TraceCfg::default()
    };
    draw_traced_contour(cfg, ReplayToken { seed, index: 0 }).contour
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("contour");
    for &extent in &[64u32, 256, 1024, 4096] {
        group.bench_with_input(BenchmarkId::new("compress", extent), &extent, |b, &e| {
            b.iter_batched(
                || traced(e, 43),
                |mut contour| {
                    let _res = contour.compress().unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("to_array", extent), &extent, |b, &e| {
            b.iter_batched(
                || traced(e, 44),
                |contour| {
                    let _pts = contour.into_points().unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("bounded_scan", extent), &extent, |b, &e| {
            let contour = traced(e, 45);
            let head = contour.ring.head().unwrap();
            b.iter(|| contour.ring.bounded_scan(head, contour.cfg.max_search).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compress);
criterion_main!(benches);
