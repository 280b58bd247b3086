//! Benchmark for cached tile lookups.
//!
//! Run with: cargo bench --package tessera_procedural --bench cache_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tessera_procedural::{
    CachePolicy, ChunkGenerator, ChunkSize, NoiseParams, TreePlacement, Viewport, WorldCache, WorldCoord,
    WorldSeed,
};

fn cache(policy: CachePolicy) -> Option<WorldCache> {
    let gen = ChunkGenerator::new(
        WorldSeed::new(42),
        NoiseParams::default(),
        ChunkSize::DEFAULT,
        TreePlacement::Stable,
    )
    .ok()?;
    Some(WorldCache::new(gen, policy))
}

fn benchmark_hot_lookup(c: &mut Criterion) {
    let Some(cache) = cache(CachePolicy::Unbounded) else {
        return;
    };
    let _ = cache.get_tile(0, 0);

    c.bench_function("get_tile_hit", |b| {
        b.iter(|| black_box(cache.get_tile(black_box(3), black_box(-4))));
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let Some(cache) = cache(CachePolicy::Unbounded) else {
        return;
    };
    let Ok(view) = Viewport::new(14, 8) else {
        return;
    };

    let mut group = c.benchmark_group("viewport");
    group.throughput(Throughput::Elements(14 * 8));
    group.bench_function("visible_tiles_14x8", |b| {
        b.iter(|| black_box(view.visible_tiles(&cache, WorldCoord::new(25, -13))));
    });
    group.finish();
}

fn benchmark_walk_with_radius(c: &mut Criterion) {
    let Ok(view) = Viewport::new(14, 8) else {
        return;
    };

    let mut group = c.benchmark_group("walk");
    group.sample_size(10);
    group.bench_function("walk_200_tiles_radius_2", |b| {
        b.iter(|| {
            let Some(cache) = cache(CachePolicy::Radius { chunks: 2 }) else {
                return;
            };
            for x in 0..200 {
                let position = WorldCoord::new(x, 0);
                let _ = cache.observe_position(position);
                let _ = black_box(view.visible_tiles(&cache, position));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_hot_lookup, benchmark_frame, benchmark_walk_with_radius);
criterion_main!(benches);
