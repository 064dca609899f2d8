use criterion::{Criterion, criterion_group, criterion_main};
use grid::PowerGrid;

fn run_all_benchmarks(c: &mut Criterion) {
    let grid = PowerGrid::new(18);

    c.bench_function("power_grid_new", |b| b.iter(|| PowerGrid::new(18)));

    let mut group_fixed = c.benchmark_group("best_square_3x3");
    group_fixed.bench_function("naive", |b| b.iter(|| grid.best_square_naive(3)));
    group_fixed.bench_function("summed_area", |b| b.iter(|| grid.best_square(3)));
    group_fixed.finish();

    let mut group_any = c.benchmark_group("best_square_3_to_299");
    group_any.sample_size(10);
    group_any.bench_function("sequential", |b| b.iter(|| grid.best_square_in(3..=299)));
    group_any.bench_function("parallel", |b| {
        b.iter(|| grid.best_square_in_parallel(3..=299))
    });
    group_any.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
