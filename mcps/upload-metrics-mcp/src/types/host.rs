//! Raw host readings

use serde::{Deserialize, Serialize};

/// Physical memory reading in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

/// Cumulative tick counters for one CPU core since boot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub sys: u64,
    pub idle: u64,
    pub irq: u64,
}

impl CpuTimes {
    pub fn total(&self) -> u64 {
        [self.user, self.nice, self.sys, self.irq]
            .iter()
            .fold(self.idle, |sum, ticks| sum.saturating_add(*ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_saturates() {
        let times = CpuTimes {
            user: u64::MAX,
            idle: 10,
            ..Default::default()
        };
        assert_eq!(times.total(), u64::MAX);
    }
}
