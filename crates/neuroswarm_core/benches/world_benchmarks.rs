use criterion::{black_box, criterion_group, criterion_main, Criterion};
use neuroswarm_core::config::AppConfig;
use neuroswarm_core::World;

fn seeded_world(population: usize, food: usize) -> World {
    let mut config = AppConfig::default();
    config.world.seed = Some(42);
    config.world.agent_capacity = population;
    config.world.initial_population = population;
    config.food.initial_count = food;
    config.food.max_count = food.max(1);
    config.evolution.epoch_length = f32::MAX;
    config.evolution.min_population = 0;
    World::new(config).expect("valid benchmark config")
}

fn bench_world_tick_1000(c: &mut Criterion) {
    let mut world = seeded_world(1000, 500);
    c.bench_function("world_tick_1000_agents", |b| {
        b.iter(|| black_box(world.tick(1.0 / 60.0).len()))
    });
}

fn bench_world_tick_10000(c: &mut Criterion) {
    let mut world = seeded_world(10_000, 4000);
    c.bench_function("world_tick_10000_agents", |b| {
        b.iter(|| black_box(world.tick(1.0 / 60.0).len()))
    });
}

fn bench_evolve(c: &mut Criterion) {
    let mut world = seeded_world(10_000, 100);
    c.bench_function("world_evolve_10000", |b| {
        b.iter(|| black_box(world.evolve()))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let world = seeded_world(10_000, 4000);
    c.bench_function("world_snapshot_10000", |b| {
        b.iter(|| black_box(world.snapshot().agent_count))
    });
}

criterion_group!(
    benches,
    bench_world_tick_1000,
    bench_world_tick_10000,
    bench_evolve,
    bench_snapshot
);
criterion_main!(benches);
