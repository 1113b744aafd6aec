//src/sim/blocks.rs

use crate::sim::configs::WORD_SIZE;

/// One cache line's worth of doubles, plus the bookkeeping the replacement
/// policies read. Blocks live in the backing store; the cache only ever
/// refers to them by index.
#[derive(Debug, Clone, PartialEq)]
pub struct DataBlock {
    data: Vec<f64>,
    /// Logical time of the last hit or fill (LRU key)
    pub last_visited: u64,
    /// Logical time of the last fill from the backing store (FIFO key)
    pub last_loaded: u64,
}

impl DataBlock {
    pub fn new(words_per_block: usize) -> Self {
        Self {
            data: vec![0.0; words_per_block],
            last_visited: 0,
            last_loaded: 0,
        }
    }

    /// Reads the word at a byte offset inside the block. The offset comes out
    /// of `addresses::decode`, so it is word aligned and in range.
    pub fn read(&self, offset: usize) -> f64 {
        debug_assert!(offset % WORD_SIZE == 0);
        self.data[offset / WORD_SIZE]
    }

    pub fn write(&mut self, offset: usize, value: f64) {
        debug_assert!(offset % WORD_SIZE == 0);
        self.data[offset / WORD_SIZE] = value;
    }
}
