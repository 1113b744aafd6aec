pub mod sim;
pub mod tests;
pub mod workloads;

// Re-export the main entry points
pub use sim::cache_stats::{Stats, StatsSnapshot};
pub use sim::configs::{CacheConfig, ReplacementPolicy, WORD_SIZE};
pub use sim::cpus::Cpu;
pub use sim::sim_errors::{SimError, SimResult};
pub use workloads::Workload;
