//! Metric collection over the host traits

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod walker;

use std::path::Path;

use crate::error::MetricsResult;
use crate::host::{FileSystem, HostProbe};
use crate::types::SystemMetrics;

/// Snapshot CPU, memory, and uploads disk usage.
///
/// Never fails. A failing disk estimate reports `disk_usage = 0`; any other
/// failure reports all three percentages as zero.
pub fn collect_system_metrics<F, P>(fs: &F, probe: &P, uploads_dir: &Path) -> SystemMetrics
where
    F: FileSystem,
    P: HostProbe,
{
    match try_collect(fs, probe, uploads_dir) {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::error!("Error getting system metrics: {}", e);
            SystemMetrics::zeroed(now_millis())
        }
    }
}

fn try_collect<F, P>(fs: &F, probe: &P, uploads_dir: &Path) -> MetricsResult<SystemMetrics>
where
    F: FileSystem,
    P: HostProbe,
{
    let cpu_usage = cpu::busy_percent(&probe.cpu_times()?)?;
    let memory_usage = memory::used_percent(probe.memory()?)?;

    let disk_usage = match disk::try_estimate_disk_usage(fs, probe, uploads_dir) {
        Ok(usage) => usage.used_percentage,
        Err(e) => {
            tracing::warn!("Could not get disk usage: {}", e);
            0.0
        }
    };

    Ok(SystemMetrics {
        cpu_usage,
        memory_usage,
        disk_usage,
        timestamp: now_millis(),
    })
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
