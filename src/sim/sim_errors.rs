//src/sim/sim_errors.rs
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    InvalidConfiguration(String),
    MisalignedAddress(String),
    OutOfRange(String),
    UnknownPolicy(String),
    UnknownWorkload(String),
    Verification(String),
}

impl SimError {
    pub fn config_error(msg: &str) -> Self {
        SimError::InvalidConfiguration(msg.to_string())
    }

    pub fn misaligned(addr: usize) -> Self {
        SimError::MisalignedAddress(format!("address {:#x} is not word aligned", addr))
    }

    pub fn out_of_range(addr: usize) -> Self {
        SimError::OutOfRange(format!("address {:#x} is outside the backing store", addr))
    }

    pub fn unknown_policy(name: &str) -> Self {
        SimError::UnknownPolicy(format!("unknown replacement policy: {}", name))
    }

    pub fn unknown_workload(name: &str) -> Self {
        SimError::UnknownWorkload(format!("unknown workload: {}", name))
    }

    pub fn verification(msg: &str) -> Self {
        SimError::Verification(msg.to_string())
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidConfiguration(msg) => write!(f, "InvalidConfiguration: {}", msg),
            SimError::MisalignedAddress(msg) => write!(f, "MisalignedAddress: {}", msg),
            SimError::OutOfRange(msg) => write!(f, "OutOfRange: {}", msg),
            SimError::UnknownPolicy(msg) => write!(f, "UnknownPolicy: {}", msg),
            SimError::UnknownWorkload(msg) => write!(f, "UnknownWorkload: {}", msg),
            SimError::Verification(msg) => write!(f, "Verification: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

/// Result type for all simulator operations
pub type SimResult<T> = Result<T, SimError>;
