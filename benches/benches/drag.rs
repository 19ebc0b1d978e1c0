// Copyright 2025 the DrawerKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use drawerkit_benches::{BenchSurface, bench_configuration};
use drawerkit_controller::DrawerController;
use kurbo::{Rect, Size};

fn drawer() -> DrawerController<BenchSurface> {
    let mut drawer = DrawerController::new(bench_configuration());
    drawer.set_container_size(Size::new(390.0, 800.0));
    drawer.attach_surface(BenchSurface {
        frame: Rect::new(0.0, 700.0, 390.0, 1_500.0),
        radius: 0.0,
    });
    drawer
}

/// One simulated drag frame: move, classify, and restyle.
fn bench_drag_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/drag");

    group.bench_function("frame_updates", |b| {
        b.iter_batched(
            drawer,
            |mut drawer| {
                let mut y = 700.0;
                while y > 0.0 {
                    drawer.set_current_y(y);
                    let radius = drawer.corner_radius_at_y(y);
                    drawer.set_current_corner_radius(radius);
                    black_box(drawer.handle_view_alpha_at_y(y));
                    y -= 2.5;
                }
                black_box(drawer.current_state());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("with_background_handler", |b| {
        b.iter_batched(
            || {
                let mut drawer = drawer();
                drawer.set_background_handler(|context: drawerkit_controller::HandleContext| {
                    black_box(context.coverage());
                });
                drawer
            },
            |mut drawer| {
                let mut y = 700.0;
                while y > 0.0 {
                    drawer.set_current_y(y);
                    y -= 2.5;
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_drag_frames);
criterion_main!(benches);
