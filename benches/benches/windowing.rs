// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_windowing::{
    AxisModel, FixedAxis, Overscan, VariableAxis, WindowedGrid, WindowedList, compute_window,
};

fn row_height(index: usize) -> f64 {
    match index % 7 {
        0 => 48.0,
        3 => 36.0,
        _ => 24.0,
    }
}

fn bench_cold_jump(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/cold_jump");

    // A fresh axis per iteration: the cost is dominated by the exponential
    // search measuring its way to the target.
    for len in [10_000usize, 100_000, 1_000_000] {
        let target = len as f64 * 12.0;
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("variable", len), &len, |b, &len| {
            b.iter_batched(
                || VariableAxis::new(len, row_height),
                |mut axis| {
                    let window = compute_window(
                        &mut axis,
                        black_box(target),
                        0.0,
                        600.0,
                        Overscan::default(),
                    );
                    black_box(window);
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("fixed", len), &len, |b, &len| {
            let mut axis = FixedAxis::try_new(len, 24.0_f64).unwrap();
            b.iter(|| {
                let window = compute_window(
                    &mut axis,
                    black_box(target),
                    0.0,
                    600.0,
                    Overscan::default(),
                );
                black_box(window);
            });
        });
    }

    group.finish();
}

fn bench_warm_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/warm_scroll");

    // Everything is measured up front, so each step is a binary search plus a
    // short linear walk over the visible items.
    for len in [10_000usize, 100_000] {
        let mut list = WindowedList::new(VariableAxis::new(len, row_height), 600.0);
        let total = list.model_mut().estimated_total_extent();
        list.set_scroll_offset(total);
        let _ = list.window();

        let steps: Vec<f64> = (0..256).map(|i| f64::from(i) * total / 256.0).collect();
        group.throughput(Throughput::Elements(steps.len() as u64));
        group.bench_with_input(BenchmarkId::new("list", len), &steps, |b, steps| {
            b.iter(|| {
                for &offset in steps {
                    list.set_scroll_offset(offset);
                    black_box(list.window());
                }
            });
        });
    }

    group.finish();
}

fn bench_grid_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("windowing/grid");

    let rows = VariableAxis::new(100_000, row_height);
    let columns = VariableAxis::new(500, |i: usize| if i % 4 == 0 { 160.0 } else { 96.0 });
    let mut grid = WindowedGrid::new(rows, columns, 1280.0, 800.0);
    group.throughput(Throughput::Elements(1));
    group.bench_function("scroll_and_collect_cells", |b| {
        let mut top = 0.0;
        b.iter(|| {
            top = (top + 97.0) % 2_000_000.0;
            grid.set_scroll_offsets(black_box(top * 0.01), black_box(top));
            let count = grid.window().map_or(0, |window| window.cells().count());
            black_box(count);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cold_jump,
    bench_warm_scroll,
    bench_grid_window
);
criterion_main!(benches);
