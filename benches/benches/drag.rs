// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use twinrange_control::{Bound, RangeSlider};
use twinrange_track::{track_bounds, value_to_x, x_to_value};

fn bench_geometry(c: &mut Criterion) {
    let track = track_bounds(Size::new(320.0, 30.0), 4.0, 6.0, 6.0);
    c.bench_function("geometry/value_to_x_round_trip", |b| {
        b.iter(|| {
            let x = value_to_x(black_box(0.37), track, 6.0) + 3.0;
            black_box(x_to_value(x, track))
        });
    });
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/drag");

    // One gesture: grab the upper thumb and sweep it across the track.
    for steps in [16_u32, 256] {
        group.bench_function(format!("sweep_{steps}"), |b| {
            b.iter_batched(
                || {
                    let mut slider = RangeSlider::new(());
                    slider.set_size(Size::new(320.0, 30.0));
                    slider.add_observer(|v| {
                        black_box(v);
                    });
                    slider
                },
                |mut slider| {
                    let center = slider.thumb_frame(Bound::Upper).center();
                    slider.touch_begin(center);
                    for i in 0..steps {
                        let x = 320.0 * f64::from(i) / f64::from(steps);
                        slider.touch_move(Point::new(x, center.y));
                    }
                    slider.touch_end();
                    black_box(slider.values());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_drag);
criterion_main!(benches);
