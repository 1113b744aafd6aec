// benches/cache_policy_benchmarks.rs

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cachelab::sim::configs::{CacheConfig, ReplacementPolicy};
use cachelab::workloads::{dot, mxm, mxm_block};

fn config(cache_size: usize, policy: ReplacementPolicy) -> CacheConfig {
    CacheConfig {
        cache_size,
        block_size: 64,
        associativity: 2,
        ram_size: 8 * 1024 * 1024,
        replacement: policy,
        seed: 0,
    }
}

/// Dot product under each replacement policy.
fn bench_replacement_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("replacement_policies");
    group.measurement_time(Duration::from_secs(5));

    let policies = [
        ReplacementPolicy::Lru,
        ReplacementPolicy::Fifo,
        ReplacementPolicy::Random,
    ];

    for policy in policies {
        group.bench_with_input(
            BenchmarkId::new("dot", policy.to_string()),
            &policy,
            |b, &policy| {
                b.iter(|| dot::run(black_box(config(1024, policy)), black_box(4000)).unwrap())
            },
        );
    }

    group.finish();
}

/// Naive against tiled matrix multiply on a cache much smaller than the
/// matrices.
fn bench_mxm_blocking(c: &mut Criterion) {
    let mut group = c.benchmark_group("mxm_blocking");
    group.measurement_time(Duration::from_secs(5));

    let dim = 40;
    group.bench_function("naive", |b| {
        b.iter(|| mxm::run(black_box(config(1024, ReplacementPolicy::Lru)), black_box(dim)).unwrap())
    });
    group.bench_function("blocked", |b| {
        b.iter(|| {
            mxm_block::run(
                black_box(config(1024, ReplacementPolicy::Lru)),
                black_box(dim),
                black_box(4),
            )
            .unwrap()
        })
    });

    group.finish();
}

/// Sweep the cache capacity the way the original experiment did.
fn bench_cache_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_sizes");
    group.measurement_time(Duration::from_secs(5));

    for cache_size in [256, 512, 1024, 2048] {
        group.bench_with_input(
            BenchmarkId::from_parameter(cache_size),
            &cache_size,
            |b, &cache_size| {
                b.iter(|| {
                    dot::run(
                        black_box(config(cache_size, ReplacementPolicy::Lru)),
                        black_box(4000),
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_replacement_policies,
    bench_mxm_blocking,
    bench_cache_sizes
);
criterion_main!(benches);
