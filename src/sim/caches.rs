//src/sim/caches.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sim::addresses::{decode, Decoded};
use crate::sim::configs::{CacheConfig, ReplacementPolicy};
use crate::sim::rams::Ram;
use crate::sim::sim_errors::SimResult;

/// One way of a set. `block` is an index into the backing store, so a block
/// resident in the cache is the same object as its RAM slot: stores through
/// the cache are durable with no write-back step.
#[derive(Debug, Clone, Copy, Default)]
struct Way {
    valid: bool,
    tag: usize,
    block: usize,
}

/// Whether a requested block was resident in its home set at access time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Hit,
    Miss,
}

pub struct Cache {
    config: CacheConfig,
    sets: Vec<Vec<Way>>,
    ram: Ram,
    /// Monotonic logical clock; every hit or fill advances it, so LRU/FIFO
    /// timestamps are never tied and runs are reproducible.
    clock: u64,
    rng: StdRng,
}

impl Cache {
    pub fn new(config: CacheConfig) -> SimResult<Self> {
        config.validate()?;
        let sets = (0..config.num_sets())
            .map(|_| vec![Way::default(); config.associativity])
            .collect();
        Ok(Self {
            sets,
            ram: Ram::new(&config),
            clock: 0,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    /// Reads the word at `addr`, filling its block from RAM on a miss.
    pub fn load(&mut self, addr: usize) -> SimResult<(f64, Access)> {
        let decoded = decode(&self.config, addr)?;

        if let Some(way) = self.find_way(&decoded) {
            let block = self.sets[decoded.set_index][way].block;
            let now = self.tick();
            let block = self.ram.block_mut(block);
            block.last_visited = now;
            return Ok((block.read(decoded.offset), Access::Hit));
        }

        let block = self.fill(&decoded, addr)?;
        Ok((self.ram.block(block).read(decoded.offset), Access::Miss))
    }

    /// Writes the word at `addr`. The resident block aliases its RAM slot, so
    /// the write lands in main memory immediately on both paths.
    pub fn store(&mut self, addr: usize, value: f64) -> SimResult<Access> {
        let decoded = decode(&self.config, addr)?;

        if let Some(way) = self.find_way(&decoded) {
            let block = self.sets[decoded.set_index][way].block;
            let now = self.tick();
            let block = self.ram.block_mut(block);
            block.last_visited = now;
            block.write(decoded.offset, value);
            return Ok(Access::Hit);
        }

        let block = self.fill(&decoded, addr)?;
        self.ram.block_mut(block).write(decoded.offset, value);
        Ok(Access::Miss)
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Scans the home set for a valid way with a matching tag.
    fn find_way(&self, decoded: &Decoded) -> Option<usize> {
        self.sets[decoded.set_index]
            .iter()
            .position(|way| way.valid && way.tag == decoded.tag)
    }

    /// Retrieves the block owning `addr` from RAM, stamps it, and installs it
    /// in the home set: the first invalid way if one exists, otherwise the
    /// victim the configured policy picks. Returns the installed block index.
    fn fill(&mut self, decoded: &Decoded, addr: usize) -> SimResult<usize> {
        let block = self.ram.block_index(addr)?;

        let now = self.tick();
        let fetched = self.ram.block_mut(block);
        fetched.last_loaded = now;
        fetched.last_visited = now;

        let way = match self.sets[decoded.set_index].iter().position(|w| !w.valid) {
            Some(free) => free,
            None => self.select_victim(decoded.set_index),
        };

        let entry = &mut self.sets[decoded.set_index][way];
        entry.valid = true;
        entry.tag = decoded.tag;
        entry.block = block;
        Ok(block)
    }

    /// Picks the way to evict from a full set. The LRU and FIFO scans use
    /// strict `<`, so timestamp ties fall to the lowest way index.
    fn select_victim(&mut self, set_index: usize) -> usize {
        let set = &self.sets[set_index];
        match self.config.replacement {
            ReplacementPolicy::Lru => {
                let mut victim = 0;
                for way in 1..set.len() {
                    let candidate = self.ram.block(set[way].block).last_visited;
                    if candidate < self.ram.block(set[victim].block).last_visited {
                        victim = way;
                    }
                }
                victim
            }
            ReplacementPolicy::Fifo => {
                let mut victim = 0;
                for way in 1..set.len() {
                    let candidate = self.ram.block(set[way].block).last_loaded;
                    if candidate < self.ram.block(set[victim].block).last_loaded {
                        victim = way;
                    }
                }
                victim
            }
            ReplacementPolicy::Random => self.rng.random_range(0..self.config.associativity),
        }
    }

    #[cfg(test)]
    fn valid_ways(&self, set_index: usize) -> Vec<(usize, usize)> {
        self.sets[set_index]
            .iter()
            .filter(|w| w.valid)
            .map(|w| (w.tag, w.block))
            .collect()
    }
}
