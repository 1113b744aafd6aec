//src/workloads/dot.rs

use crate::sim::cache_stats::StatsSnapshot;
use crate::sim::configs::{CacheConfig, WORD_SIZE};
use crate::sim::cpus::Cpu;
use crate::sim::sim_errors::{SimError, SimResult};

/// Dot product of two length-`n` vectors. Layout in words: `a` at 0..n,
/// `b` at n..2n, the scalar result at word 2n.
pub fn run(config: CacheConfig, n: usize) -> SimResult<StatsSnapshot> {
    let mut cpu = Cpu::new(config)?;

    let a: Vec<usize> = (0..n).map(|i| i * WORD_SIZE).collect();
    let b: Vec<usize> = (n..2 * n).map(|i| i * WORD_SIZE).collect();
    let c = 2 * n * WORD_SIZE;

    // Seed the operands behind the cache's back.
    for i in 0..n {
        cpu.ram_mut().poke(a[i], i as f64)?;
        cpu.ram_mut().poke(b[i], 2.0 * i as f64)?;
    }

    cpu.stats_mut().enable();
    let mut register0 = 0.0;
    for i in 0..n {
        let register1 = cpu.load_word(a[i])?;
        let register2 = cpu.load_word(b[i])?;
        let register3 = cpu.mult(register1, register2);
        register0 = cpu.add(register0, register3);
    }
    cpu.store_word(c, register0)?;
    cpu.stats_mut().disable();

    let mut expected = 0.0;
    for i in 0..n {
        expected += cpu.ram().peek(a[i])? * cpu.ram().peek(b[i])?;
    }
    if cpu.ram().peek(c)? != expected {
        return Err(SimError::verification("dot product result mismatch"));
    }

    Ok(cpu.stats().snapshot())
}
