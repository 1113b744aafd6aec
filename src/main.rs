//src/main.rs

use clap::Parser;

use cachelab::sim::configs::{CacheConfig, ReplacementPolicy};
use cachelab::workloads::{self, Workload};

fn parse_policy(s: &str) -> Result<ReplacementPolicy, String> {
    s.parse().map_err(|e: cachelab::SimError| e.to_string())
}

fn parse_workload(s: &str) -> Result<Workload, String> {
    s.parse().map_err(|e: cachelab::SimError| e.to_string())
}

/// Set-associative cache simulator driven by numeric workloads
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The size of the cache in bytes
    #[arg(short = 'c', long, default_value_t = 65536)]
    cache_size: usize,

    /// The size of a data block in bytes
    #[arg(short = 'b', long, default_value_t = 64)]
    block_size: usize,

    /// The n-way associativity of the cache
    #[arg(short = 'n', long, default_value_t = 2)]
    associativity: usize,

    /// The replacement policy (LRU, FIFO or random)
    #[arg(short = 'r', long, default_value = "LRU", value_parser = parse_policy)]
    replacement: ReplacementPolicy,

    /// The algorithm to simulate (dot, mxm or mxm_block)
    #[arg(short = 'a', long, default_value = "mxm", value_parser = parse_workload)]
    algorithm: Workload,

    /// The size of the backing store in bytes
    #[arg(long, default_value_t = 64 * 1024 * 1024)]
    ram_size: usize,

    /// Seed for the random replacement policy
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = CacheConfig {
        cache_size: args.cache_size,
        block_size: args.block_size,
        associativity: args.associativity,
        ram_size: args.ram_size,
        replacement: args.replacement,
        seed: args.seed,
    };
    config.validate()?;

    println!("Running configuration:");
    println!(
        "  cache: {} bytes, {}-byte blocks, {}-way, {} sets, {} replacement",
        config.cache_size,
        config.block_size,
        config.associativity,
        config.num_sets(),
        config.replacement
    );
    println!(
        "  backing store: {} bytes, workload: {}, seed: {}",
        config.ram_size, args.algorithm, config.seed
    );
    println!();

    let snapshot = workloads::run(args.algorithm, config)?;
    println!("{}", snapshot);

    Ok(())
}
