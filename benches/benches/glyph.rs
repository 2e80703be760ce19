// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use twinrange_glyph::circle_mask;

fn bench_circle_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("glyph/circle_mask");

    // Default glyph for a 4pt track at common display scales.
    for scale in [1.0_f64, 2.0, 3.0] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| black_box(circle_mask(6.0, scale)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_circle_mask);
criterion_main!(benches);
