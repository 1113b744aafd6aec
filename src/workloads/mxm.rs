//src/workloads/mxm.rs

use crate::sim::cache_stats::StatsSnapshot;
use crate::sim::configs::{CacheConfig, WORD_SIZE};
use crate::sim::cpus::Cpu;
use crate::sim::sim_errors::{SimError, SimResult};

/// Word addresses of the three dim x dim matrices, packed back to back:
/// a, then b, then c.
pub(crate) fn layout(dim: usize) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    let cells = dim * dim;
    let addr = |word: usize| word * WORD_SIZE;
    (
        (0..cells).map(addr).collect(),
        (cells..2 * cells).map(addr).collect(),
        (2 * cells..3 * cells).map(addr).collect(),
    )
}

/// Seeds every matrix cell with its linear index, bypassing the cache.
pub(crate) fn seed(cpu: &mut Cpu, a: &[usize], b: &[usize], c: &[usize]) -> SimResult<()> {
    for (i, &addr) in a.iter().chain(b.iter()).chain(c.iter()).enumerate() {
        let index = i % a.len();
        cpu.ram_mut().poke(addr, index as f64)?;
    }
    Ok(())
}

/// Recomputes c from RAM and compares with what the measured run stored.
pub(crate) fn verify(cpu: &Cpu, dim: usize, a: &[usize], b: &[usize], c: &[usize]) -> SimResult<()> {
    for i in 0..dim {
        for j in 0..dim {
            // c was seeded with its linear index and accumulated in place
            let mut expected = (i * dim + j) as f64;
            for k in 0..dim {
                expected += cpu.ram().peek(a[i * dim + k])? * cpu.ram().peek(b[k * dim + j])?;
            }
            if cpu.ram().peek(c[i * dim + j])? != expected {
                return Err(SimError::verification(&format!(
                    "mxm result mismatch at ({}, {})",
                    i, j
                )));
            }
        }
    }
    Ok(())
}

/// Naive dense matrix multiply, c += a * b over square matrices.
pub fn run(config: CacheConfig, dim: usize) -> SimResult<StatsSnapshot> {
    let mut cpu = Cpu::new(config)?;
    let (a, b, c) = layout(dim);
    seed(&mut cpu, &a, &b, &c)?;

    cpu.stats_mut().enable();
    for i in 0..dim {
        for j in 0..dim {
            let mut c_ij = cpu.load_word(c[i * dim + j])?;
            for k in 0..dim {
                let a_ik = cpu.load_word(a[i * dim + k])?;
                let b_kj = cpu.load_word(b[k * dim + j])?;
                let product = cpu.mult(a_ik, b_kj);
                c_ij = cpu.add(c_ij, product);
            }
            cpu.store_word(c[i * dim + j], c_ij)?;
        }
    }
    cpu.stats_mut().disable();

    verify(&cpu, dim, &a, &b, &c)?;
    Ok(cpu.stats().snapshot())
}
