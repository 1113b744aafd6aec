//src/sim/configs.rs

use std::fmt;
use std::str::FromStr;

use crate::sim::sim_errors::{SimError, SimResult};

/// Every word in the simulated machine is one 8-byte double.
pub const WORD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    Lru,
    Fifo,
    Random,
}

impl FromStr for ReplacementPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lru" => Ok(ReplacementPolicy::Lru),
            "fifo" => Ok(ReplacementPolicy::Fifo),
            "random" => Ok(ReplacementPolicy::Random),
            _ => Err(SimError::unknown_policy(s)),
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplacementPolicy::Lru => write!(f, "LRU"),
            ReplacementPolicy::Fifo => write!(f, "FIFO"),
            ReplacementPolicy::Random => write!(f, "random"),
        }
    }
}

/// Cache and backing-store geometry, immutable for a run.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Total cache capacity in bytes
    pub cache_size: usize,
    /// Bytes per cache block
    pub block_size: usize,
    /// Ways per set
    pub associativity: usize,
    /// Backing-store capacity in bytes
    pub ram_size: usize,
    pub replacement: ReplacementPolicy,
    /// Seed for the Random policy, so runs are repeatable
    pub seed: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_size: 65536,
            block_size: 64,
            associativity: 2,
            ram_size: 64 * 1024 * 1024, // 64MB
            replacement: ReplacementPolicy::Lru,
            seed: 0,
        }
    }
}

impl CacheConfig {
    pub fn words_per_block(&self) -> usize {
        self.block_size / WORD_SIZE
    }

    pub fn blocks_in_cache(&self) -> usize {
        self.cache_size / self.block_size
    }

    pub fn num_sets(&self) -> usize {
        self.blocks_in_cache() / self.associativity
    }

    pub fn blocks_in_ram(&self) -> usize {
        self.ram_size / self.block_size
    }

    /// Checks the geometry invariants. Run once before any state is built.
    pub fn validate(&self) -> SimResult<()> {
        if self.block_size == 0 || self.block_size % WORD_SIZE != 0 {
            return Err(SimError::config_error(&format!(
                "block_size {} must be a positive multiple of the {}-byte word",
                self.block_size, WORD_SIZE
            )));
        }
        if self.cache_size == 0 || self.cache_size % self.block_size != 0 {
            return Err(SimError::config_error(&format!(
                "cache_size {} must be a positive multiple of block_size {}",
                self.cache_size, self.block_size
            )));
        }
        if self.associativity == 0 || self.blocks_in_cache() % self.associativity != 0 {
            return Err(SimError::config_error(&format!(
                "associativity {} must evenly divide the {} cache blocks",
                self.associativity,
                self.blocks_in_cache()
            )));
        }
        if self.ram_size % self.block_size != 0 || self.ram_size < self.cache_size {
            return Err(SimError::config_error(&format!(
                "ram_size {} must be a block multiple covering at least the cache",
                self.ram_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CacheConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.blocks_in_cache(), 1024);
        assert_eq!(config.num_sets(), 512);
        assert_eq!(config.words_per_block(), 8);
    }

    #[test]
    fn test_num_sets_calculation() {
        let config = CacheConfig {
            cache_size: 1024,
            block_size: 64,
            associativity: 4,
            ..CacheConfig::default()
        };
        assert_eq!(config.num_sets(), 4); // 1024 / (64 * 4) = 4
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut config = CacheConfig::default();
        config.block_size = 12; // not a word multiple
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfiguration(_))
        ));

        let mut config = CacheConfig::default();
        config.associativity = 3; // 1024 blocks % 3 != 0
        assert!(config.validate().is_err());

        let mut config = CacheConfig::default();
        config.ram_size = config.cache_size / 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "LRU".parse::<ReplacementPolicy>().unwrap(),
            ReplacementPolicy::Lru
        );
        assert_eq!(
            "fifo".parse::<ReplacementPolicy>().unwrap(),
            ReplacementPolicy::Fifo
        );
        assert_eq!(
            "random".parse::<ReplacementPolicy>().unwrap(),
            ReplacementPolicy::Random
        );
        assert!(matches!(
            "mru".parse::<ReplacementPolicy>(),
            Err(SimError::UnknownPolicy(_))
        ));
    }
}
