//! Criterion benchmarks for ring assembly.
//! Focus sizes: exteriors in {1, 4, 16, 64}, four holes each.
//! Results: by default under target/criterion.

use arcgis2geojson::rings::assemble_polygons;
use arcgis2geojson::rings::rand::{draw_nested_rings, RadialCfg, ReplayToken};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    for &n in &[1usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("nested_holes", n), &n, |b, &n| {
            b.iter_batched(
                || draw_nested_rings(RadialCfg::default(), n, 4, ReplayToken { seed: 43, index: 0 }),
                |rings| {
                    let _polys = assemble_polygons(&rings);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("orphan_holes", n), &n, |b, &n| {
            // every ring reversed: no exteriors, all holes fall through to promotion
            b.iter_batched(
                || {
                    let mut rings =
                        draw_nested_rings(RadialCfg::default(), n, 0, ReplayToken { seed: 44, index: 0 });
                    rings.iter_mut().for_each(|r| r.reverse());
                    rings
                },
                |rings| {
                    let _polys = assemble_polygons(&rings);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
