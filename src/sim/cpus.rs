//src/sim/cpus.rs

use crate::sim::cache_stats::Stats;
use crate::sim::caches::{Access, Cache};
use crate::sim::configs::CacheConfig;
use crate::sim::rams::Ram;
use crate::sim::sim_errors::SimResult;

/// The processor façade workloads drive. Every operation retires exactly one
/// instruction; loads and stores additionally report their hit/miss outcome
/// to the stats collector.
pub struct Cpu {
    cache: Cache,
    stats: Stats,
}

impl Cpu {
    pub fn new(config: CacheConfig) -> SimResult<Self> {
        Ok(Self {
            cache: Cache::new(config)?,
            stats: Stats::new(),
        })
    }

    pub fn load_word(&mut self, addr: usize) -> SimResult<f64> {
        let (value, access) = self.cache.load(addr)?;
        self.stats.record_instruction();
        match access {
            Access::Hit => self.stats.record_read_hit(),
            Access::Miss => self.stats.record_read_miss(),
        }
        Ok(value)
    }

    pub fn store_word(&mut self, addr: usize, value: f64) -> SimResult<()> {
        let access = self.cache.store(addr, value)?;
        self.stats.record_instruction();
        match access {
            Access::Hit => self.stats.record_write_hit(),
            Access::Miss => self.stats.record_write_miss(),
        }
        Ok(())
    }

    /// Word addition; no memory side effect.
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.stats.record_instruction();
        a + b
    }

    /// Word multiplication; no memory side effect.
    pub fn mult(&mut self, a: f64, b: f64) -> f64 {
        self.stats.record_instruction();
        a * b
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    /// Direct backing-store access, used by workloads to pre-populate memory
    /// without touching the cache or the counters.
    pub fn ram(&self) -> &Ram {
        self.cache.ram()
    }

    pub fn ram_mut(&mut self) -> &mut Ram {
        self.cache.ram_mut()
    }

    pub fn config(&self) -> &CacheConfig {
        self.cache.config()
    }
}
