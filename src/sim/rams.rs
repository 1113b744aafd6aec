//src/sim/rams.rs

use crate::sim::addresses::check_word_aligned;
use crate::sim::blocks::DataBlock;
use crate::sim::configs::{CacheConfig, WORD_SIZE};
use crate::sim::sim_errors::{SimError, SimResult};

/// Main memory: a flat, pre-allocated array of blocks. Never reallocates
/// during a run, so block indices handed to the cache stay valid.
#[derive(Debug)]
pub struct Ram {
    blocks: Vec<DataBlock>,
    block_size: usize,
}

impl Ram {
    pub fn new(config: &CacheConfig) -> Self {
        let blocks = (0..config.blocks_in_ram())
            .map(|_| DataBlock::new(config.words_per_block()))
            .collect();
        Self {
            blocks,
            block_size: config.block_size,
        }
    }

    /// Index of the block owning `addr`.
    pub fn block_index(&self, addr: usize) -> SimResult<usize> {
        let index = addr / self.block_size;
        if index >= self.blocks.len() {
            return Err(SimError::out_of_range(addr));
        }
        Ok(index)
    }

    pub fn block(&self, index: usize) -> &DataBlock {
        &self.blocks[index]
    }

    pub fn block_mut(&mut self, index: usize) -> &mut DataBlock {
        &mut self.blocks[index]
    }

    /// Reads a word straight from memory, bypassing the cache. Workloads use
    /// this for setup and verification so measured statistics stay clean.
    pub fn peek(&self, addr: usize) -> SimResult<f64> {
        check_word_aligned(addr)?;
        let index = self.block_index(addr)?;
        Ok(self.blocks[index].read(addr % self.block_size))
    }

    /// Writes a word straight to memory, bypassing the cache.
    pub fn poke(&mut self, addr: usize, value: f64) -> SimResult<()> {
        check_word_aligned(addr)?;
        let index = self.block_index(addr)?;
        self.blocks[index].write(addr % self.block_size, value);
        Ok(())
    }

    pub fn words(&self) -> usize {
        self.blocks.len() * self.block_size / WORD_SIZE
    }
}
