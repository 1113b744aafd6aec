// Integrated tests for the cache simulator: whole-machine scenarios that
// cross the Cpu, Cache, Ram and Stats boundaries together.

use crate::sim::configs::{CacheConfig, ReplacementPolicy};
use crate::sim::cpus::Cpu;
use crate::workloads::{self, dot, mxm, mxm_block, Workload};

fn config(policy: ReplacementPolicy) -> CacheConfig {
    CacheConfig {
        cache_size: 1024,
        block_size: 64,
        associativity: 2,
        ram_size: 1024 * 1024,
        replacement: policy,
        seed: 0,
    }
}

#[test]
fn test_store_through_cpu_is_durable_in_ram() {
    let mut cpu = Cpu::new(config(ReplacementPolicy::Lru)).unwrap();

    cpu.store_word(128, 4.5).unwrap();
    // No flush step exists; the resident block is the RAM block.
    assert_eq!(cpu.ram().peek(128).unwrap(), 4.5);

    // Evict the block by filling its set with conflicting addresses, then
    // reload: the value survives in RAM.
    let num_sets = cpu.config().num_sets();
    let block_size = cpu.config().block_size;
    for conflict in 1..=2 {
        cpu.load_word(128 + conflict * num_sets * block_size).unwrap();
    }
    assert_eq!(cpu.load_word(128).unwrap(), 4.5);
}

#[test]
fn test_measured_region_is_isolated() {
    let mut cpu = Cpu::new(config(ReplacementPolicy::Lru)).unwrap();

    // Setup traffic before enabling: not measured.
    for i in 0..16 {
        cpu.store_word(i * 8, i as f64).unwrap();
    }
    assert_eq!(cpu.stats().snapshot().instructions, 0);

    cpu.stats_mut().enable();
    cpu.load_word(0).unwrap();
    cpu.stats_mut().disable();

    // Traffic after disabling: not measured either.
    for i in 0..16 {
        cpu.load_word(i * 8).unwrap();
    }

    let snap = cpu.stats().snapshot();
    assert_eq!(snap.instructions, 1);
    assert_eq!(snap.read_hits, 1);
    assert_eq!(snap.total_accesses(), 1);
}

#[test]
fn test_workload_dispatch_produces_counters() {
    let snap = workloads::run(Workload::Dot, config(ReplacementPolicy::Lru)).unwrap();
    assert!(snap.instructions > 0);
    assert!(snap.read_misses > 0);
}

#[test]
fn test_dot_trace_is_identical_across_identical_runs() {
    for policy in [
        ReplacementPolicy::Lru,
        ReplacementPolicy::Fifo,
        ReplacementPolicy::Random,
    ] {
        let first = dot::run(config(policy), 512).unwrap();
        let second = dot::run(config(policy), 512).unwrap();
        assert_eq!(first, second, "{} run not reproducible", policy);
    }
}

#[test]
fn test_random_policy_is_deterministic_under_a_fixed_seed() {
    // Thrash a small cache so the random victim choice actually steers
    // the counters, then check two identically-seeded runs agree.
    let mut base = config(ReplacementPolicy::Random);
    base.cache_size = 256;
    base.seed = 99;

    let mut reseeded = base;
    reseeded.seed = 7;

    let first = mxm::run(base, 16).unwrap();
    let same = mxm::run(base, 16).unwrap();
    let other = mxm::run(reseeded, 16).unwrap();

    assert_eq!(first, same);
    // The instruction stream does not depend on the seed, only the
    // hit/miss split can.
    assert_eq!(first.instructions, other.instructions);
    assert_eq!(first.total_accesses(), other.total_accesses());
}

#[test]
fn test_blocking_improves_hit_rate_on_a_small_cache() {
    // Each 40x40 matrix is 12.8KB against a 1KB cache: the naive column
    // walk of b gets no reuse, the 4x4 tiles do.
    let cfg = config(ReplacementPolicy::Lru);

    let naive = mxm::run(cfg, 40).unwrap();
    let blocked = mxm_block::run(cfg, 40, 4).unwrap();
    assert!(
        blocked.read_hit_rate() > naive.read_hit_rate(),
        "blocked {:.3} <= naive {:.3}",
        blocked.read_hit_rate(),
        naive.read_hit_rate()
    );
}
