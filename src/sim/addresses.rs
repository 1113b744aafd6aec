//src/sim/addresses.rs

use crate::sim::configs::{CacheConfig, WORD_SIZE};
use crate::sim::sim_errors::{SimError, SimResult};

/// An address split into the three fields that locate its block in the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub tag: usize,
    pub set_index: usize,
    /// Byte offset of the word inside its block
    pub offset: usize,
}

/// Loads and stores operate on whole words, so the address must sit on a
/// word boundary.
pub fn check_word_aligned(addr: usize) -> SimResult<()> {
    if addr % WORD_SIZE != 0 {
        return Err(SimError::misaligned(addr));
    }
    Ok(())
}

/// Splits a byte address into (tag, set index, block offset).
///
/// Geometry is not restricted to powers of two, so this divides and takes
/// remainders instead of shifting bits:
///   tag       = addr / (block_size * num_sets)
///   set_index = (addr / block_size) % num_sets
///   offset    = addr % block_size
pub fn decode(config: &CacheConfig, addr: usize) -> SimResult<Decoded> {
    check_word_aligned(addr)?;

    let block_number = addr / config.block_size;
    Ok(Decoded {
        tag: addr / (config.block_size * config.num_sets()),
        set_index: block_number % config.num_sets(),
        offset: addr % config.block_size,
    })
}
