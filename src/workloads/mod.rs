//src/workloads/mod.rs
//
// Numeric workloads driven against the Cpu facade. Each one seeds the
// backing store directly (no cache traffic), measures only its algorithm's
// loads/stores/arithmetic, then re-checks the result against a reference
// computation straight out of RAM.

use std::fmt;
use std::str::FromStr;

use crate::sim::cache_stats::StatsSnapshot;
use crate::sim::configs::CacheConfig;
use crate::sim::sim_errors::{SimError, SimResult};

pub mod dot;
pub mod mxm;
pub mod mxm_block;

/// Default vector length for the dot product.
pub const DOT_LEN: usize = 20000;
/// Default square-matrix dimension for both matrix multiplies.
pub const MXM_DIM: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Dot,
    Mxm,
    MxmBlock,
}

impl FromStr for Workload {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dot" => Ok(Workload::Dot),
            "mxm" => Ok(Workload::Mxm),
            "mxm_block" => Ok(Workload::MxmBlock),
            _ => Err(SimError::unknown_workload(s)),
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Workload::Dot => write!(f, "dot"),
            Workload::Mxm => write!(f, "mxm"),
            Workload::MxmBlock => write!(f, "mxm_block"),
        }
    }
}

/// Runs a workload at its default size and returns the measured counters.
pub fn run(workload: Workload, config: CacheConfig) -> SimResult<StatsSnapshot> {
    match workload {
        Workload::Dot => dot::run(config, DOT_LEN),
        Workload::Mxm => mxm::run(config, MXM_DIM),
        Workload::MxmBlock => mxm_block::run(config, MXM_DIM, MXM_DIM / 10),
    }
}
