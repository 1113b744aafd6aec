pub mod addresses;
pub mod blocks;
pub mod cache_stats;
pub mod caches;
pub mod configs;
pub mod cpus;
pub mod rams;
pub mod sim_errors;
