//! System health snapshot types

use serde::{Deserialize, Serialize};

/// Combined CPU, memory, and disk usage percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    /// Busy share of cumulative CPU ticks since boot (0-100)
    pub cpu_usage: f64,
    /// Used share of physical memory (0-100)
    pub memory_usage: f64,
    /// Used share of the estimated uploads capacity (0-100)
    pub disk_usage: f64,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl SystemMetrics {
    /// All-zero snapshot stamped with `timestamp`
    pub fn zeroed(timestamp: i64) -> Self {
        Self {
            cpu_usage: 0.0,
            memory_usage: 0.0,
            disk_usage: 0.0,
            timestamp,
        }
    }
}
