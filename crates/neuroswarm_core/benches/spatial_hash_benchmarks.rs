use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neuroswarm_core::spatial_hash::SpatialHash;

fn grid_positions(n: usize) -> Vec<(f32, f32)> {
    (0..n)
        .map(|i| {
            let x = (i % 100) as f32 * 96.0;
            let y = (i / 100) as f32 * 54.0;
            (x, y)
        })
        .collect()
}

fn bench_spatial_hash_build(c: &mut Criterion) {
    let positions = grid_positions(10_000);
    let mut spatial = SpatialHash::new(9600.0, 5400.0, 50.0, positions.len());

    c.bench_function("spatial_hash_build_10000", |b| {
        b.iter(|| {
            spatial.clear();
            for (i, &(x, y)) in positions.iter().enumerate() {
                spatial.insert(i, x, y);
            }
            black_box(spatial.cell_count())
        })
    });
}

fn bench_spatial_hash_query(c: &mut Criterion) {
    let positions = grid_positions(10_000);
    let mut spatial = SpatialHash::new(9600.0, 5400.0, 50.0, positions.len());
    for (i, &(x, y)) in positions.iter().enumerate() {
        spatial.insert(i, x, y);
    }

    c.bench_function("spatial_hash_query_window_1", |b| {
        let mut results = Vec::new();
        b.iter(|| {
            spatial.query_into(black_box(4800.0), black_box(2700.0), 1, &mut results);
            black_box(results.len())
        })
    });

    c.bench_function("spatial_hash_query_window_2", |b| {
        let mut results = Vec::new();
        b.iter(|| {
            spatial.query_into(black_box(4800.0), black_box(2700.0), 2, &mut results);
            black_box(results.len())
        })
    });
}

fn bench_spatial_hash_callback(c: &mut Criterion) {
    let positions = grid_positions(10_000);
    let mut spatial = SpatialHash::new(9600.0, 5400.0, 50.0, positions.len());
    for (i, &(x, y)) in positions.iter().enumerate() {
        spatial.insert(i, x, y);
    }

    c.bench_function("spatial_hash_callback_window_1", |b| {
        b.iter(|| {
            let mut seen = 0usize;
            spatial.query_callback(black_box(4800.0), black_box(2700.0), 1, |_| seen += 1);
            black_box(seen)
        })
    });
}

criterion_group!(
    benches,
    bench_spatial_hash_build,
    bench_spatial_hash_query,
    bench_spatial_hash_callback
);
criterion_main!(benches);
