//! Benchmark for chunk generation.
//!
//! Run with: cargo bench --package tessera_procedural --bench chunk_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tessera_procedural::chunk::{ChunkCoord, ChunkGenerator, ChunkSize, TreePlacement};
use tessera_procedural::noise::{NoiseParams, WorldSeed};

fn generator(trees: TreePlacement) -> Option<ChunkGenerator> {
    ChunkGenerator::new(WorldSeed::new(42), NoiseParams::default(), ChunkSize::DEFAULT, trees).ok()
}

fn benchmark_single_chunk(c: &mut Criterion) {
    let Some(gen) = generator(TreePlacement::Stable) else {
        return;
    };

    c.bench_function("single_chunk_generation", |b| {
        let mut coord = 0i32;
        b.iter(|| {
            coord = coord.wrapping_add(1);
            black_box(gen.generate(ChunkCoord::new(coord, -coord / 2)))
        });
    });
}

fn benchmark_tree_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_placement");

    for (label, policy) in [("stable", TreePlacement::Stable), ("volatile", TreePlacement::Volatile)] {
        let Some(gen) = generator(policy) else {
            continue;
        };
        group.bench_function(label, |b| {
            b.iter(|| black_box(gen.generate(ChunkCoord::new(3, -7))));
        });
    }

    group.finish();
}

fn benchmark_chunk_grid(c: &mut Criterion) {
    let Some(gen) = generator(TreePlacement::Stable) else {
        return;
    };

    let mut group = c.benchmark_group("chunk_grid");
    group.throughput(Throughput::Elements(32 * 32));
    group.sample_size(10);

    group.bench_function("32x32_chunks", |b| {
        b.iter(|| {
            for cy in -16..16 {
                for cx in -16..16 {
                    let _ = black_box(gen.generate(ChunkCoord::new(cx, cy)));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_chunk, benchmark_tree_policies, benchmark_chunk_grid);
criterion_main!(benches);
