// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use drawerkit_benches::bench_configuration;
use drawerkit_geometry::{DrawerGeometry, interpolation_fraction, state_for_y};
use std::time::Duration;

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/state_for_y");

    for samples in [64usize, 1_024, 16_384] {
        let ys: Vec<f64> = (0..samples)
            .map(|i| 800.0 * i as f64 / samples as f64)
            .collect();
        group.throughput(Throughput::Elements(samples as u64));

        group.bench_with_input(BenchmarkId::new("free_fn", samples), &ys, |b, ys| {
            b.iter(|| {
                for &y in ys {
                    black_box(state_for_y(
                        y, 0.0, 100.0, 400.0, 800.0, 20.0, 20.0, true,
                    ));
                }
            });
        });

        // Resolving once and reusing the snapshot is the typical drag loop.
        let geometry = bench_configuration().resolve(800.0);
        group.bench_with_input(BenchmarkId::new("resolved", samples), &ys, |b, ys| {
            b.iter(|| {
                for &y in ys {
                    black_box(geometry.state_for_y(y));
                }
            });
        });
    }

    group.finish();
}

fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/interpolation_fraction");
    let ys: Vec<f64> = (0..4_096).map(|i| f64::from(i) * 800.0 / 4_096.0).collect();
    group.throughput(Throughput::Elements(ys.len() as u64));

    for supports_partial in [true, false] {
        group.bench_with_input(
            BenchmarkId::new("supports_partial", supports_partial),
            &ys,
            |b, ys| {
                b.iter(|| {
                    for &y in ys {
                        black_box(interpolation_fraction(y, 0.0, 400.0, 800.0, supports_partial));
                    }
                });
            },
        );
    }

    group.bench_function("resolve", |b| {
        b.iter(|| {
            black_box(DrawerGeometry::new(
                black_box(800.0),
                0.0,
                100.0,
                Some(400.0),
                true,
                20.0,
                20.0,
            ))
        });
    });

    group.finish();
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_classification, bench_interpolation
}
criterion_main!(benches);
