//src/workloads/mxm_block.rs

use crate::sim::cache_stats::StatsSnapshot;
use crate::sim::configs::CacheConfig;
use crate::sim::cpus::Cpu;
use crate::sim::sim_errors::{SimError, SimResult};
use crate::workloads::mxm::{layout, seed, verify};

/// Blocked dense matrix multiply: same arithmetic as `mxm`, looped over
/// `step` x `step` tiles so the working set fits the cache better.
pub fn run(config: CacheConfig, dim: usize, step: usize) -> SimResult<StatsSnapshot> {
    if step == 0 || dim % step != 0 {
        return Err(SimError::config_error(&format!(
            "tile size {} must evenly divide dimension {}",
            step, dim
        )));
    }

    let mut cpu = Cpu::new(config)?;
    let (a, b, c) = layout(dim);
    seed(&mut cpu, &a, &b, &c)?;

    cpu.stats_mut().enable();
    for sj in (0..dim).step_by(step) {
        for si in (0..dim).step_by(step) {
            for sk in (0..dim).step_by(step) {
                for i in si..si + step {
                    for j in sj..sj + step {
                        let mut c_ij = cpu.load_word(c[i * dim + j])?;
                        for k in sk..sk + step {
                            let a_ik = cpu.load_word(a[i * dim + k])?;
                            let b_kj = cpu.load_word(b[k * dim + j])?;
                            let product = cpu.mult(a_ik, b_kj);
                            c_ij = cpu.add(c_ij, product);
                        }
                        cpu.store_word(c[i * dim + j], c_ij)?;
                    }
                }
            }
        }
    }
    cpu.stats_mut().disable();

    verify(&cpu, dim, &a, &b, &c)?;
    Ok(cpu.stats().snapshot())
}
