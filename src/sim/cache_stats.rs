//src/sim/cache_stats.rs

use std::fmt;

/// The five counters a run reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub instructions: u64,
    pub read_hits: u64,
    pub read_misses: u64,
    pub write_hits: u64,
    pub write_misses: u64,
}

impl StatsSnapshot {
    pub fn read_hit_rate(&self) -> f64 {
        let total = self.read_hits + self.read_misses;
        if total == 0 {
            0.0
        } else {
            self.read_hits as f64 / total as f64
        }
    }

    pub fn write_hit_rate(&self) -> f64 {
        let total = self.write_hits + self.write_misses;
        if total == 0 {
            0.0
        } else {
            self.write_hits as f64 / total as f64
        }
    }

    pub fn total_accesses(&self) -> u64 {
        self.read_hits + self.read_misses + self.write_hits + self.write_misses
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Run Statistics:\n\
             Instructions: {}\n\
             Read Hits: {}\n\
             Read Misses: {}\n\
             Write Hits: {}\n\
             Write Misses: {}\n\
             Read Hit Rate: {:.2}%\n\
             Write Hit Rate: {:.2}%\n",
            self.instructions,
            self.read_hits,
            self.read_misses,
            self.write_hits,
            self.write_misses,
            self.read_hit_rate() * 100.0,
            self.write_hit_rate() * 100.0
        )
    }
}

/// Counter collector the processor reports into. Starts disabled so warm-up
/// and setup traffic stays out of the measurement; recording while disabled
/// is a deliberate no-op, not an error.
#[derive(Debug, Default, Clone)]
pub struct Stats {
    counters: StatsSnapshot,
    enabled: bool,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn record_instruction(&mut self) {
        if self.enabled {
            self.counters.instructions += 1;
        }
    }

    pub fn record_read_hit(&mut self) {
        if self.enabled {
            self.counters.read_hits += 1;
        }
    }

    pub fn record_read_miss(&mut self) {
        if self.enabled {
            self.counters.read_misses += 1;
        }
    }

    pub fn record_write_hit(&mut self) {
        if self.enabled {
            self.counters.write_hits += 1;
        }
    }

    pub fn record_write_miss(&mut self) {
        if self.enabled {
            self.counters.write_misses += 1;
        }
    }

    /// The counters at the moment of the call.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.counters
    }
}
