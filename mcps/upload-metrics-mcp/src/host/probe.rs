//! Host probe backed by `sysinfo` and procfs

use std::sync::Mutex;

use sysinfo::System;

use super::HostProbe;
use crate::error::{MetricsError, MetricsResult};
use crate::types::{CpuTimes, MemorySnapshot};

/// The real host
pub struct SysinfoProbe {
    system: Mutex<System>,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe for SysinfoProbe {
    fn memory(&self) -> MetricsResult<MemorySnapshot> {
        let mut sys = self
            .system
            .lock()
            .map_err(|e| MetricsError::Probe(e.to_string()))?;
        sys.refresh_memory();

        Ok(MemorySnapshot {
            total_bytes: sys.total_memory(),
            free_bytes: sys.available_memory(),
        })
    }

    #[cfg(target_os = "linux")]
    fn cpu_times(&self) -> MetricsResult<Vec<CpuTimes>> {
        const PROC_STAT: &str = "/proc/stat";
        let raw = std::fs::read_to_string(PROC_STAT).map_err(|e| MetricsError::io(PROC_STAT, e))?;
        parse_proc_stat(&raw)
    }

    #[cfg(not(target_os = "linux"))]
    fn cpu_times(&self) -> MetricsResult<Vec<CpuTimes>> {
        Err(MetricsError::CpuTimesUnavailable(format!(
            "per-core tick counters are not supported on {}",
            std::env::consts::OS
        )))
    }
}

/// Parse the per-core `cpuN` lines of `/proc/stat`.
///
/// Field order is `user nice system idle iowait irq ...`; `iowait` and the
/// counters after `irq` are not part of [`CpuTimes`]. The aggregate `cpu`
/// line is ignored.
pub fn parse_proc_stat(raw: &str) -> MetricsResult<Vec<CpuTimes>> {
    let mut cores = Vec::new();

    for line in raw.lines() {
        let Some(rest) = line.strip_prefix("cpu") else {
            continue;
        };
        if !rest.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }

        let fields: Vec<u64> = rest
            .split_whitespace()
            .skip(1)
            .map(|s| s.parse::<u64>())
            .collect::<Result<_, _>>()
            .map_err(|e| MetricsError::CpuTimesUnavailable(format!("{line:?}: {e}")))?;

        if fields.len() < 4 {
            return Err(MetricsError::CpuTimesUnavailable(format!(
                "too few counters in {line:?}"
            )));
        }

        cores.push(CpuTimes {
            user: fields[0],
            nice: fields[1],
            sys: fields[2],
            idle: fields[3],
            irq: fields.get(5).copied().unwrap_or(0),
        });
    }

    if cores.is_empty() {
        return Err(MetricsError::CpuTimesUnavailable(
            "no per-core lines found".to_string(),
        ));
    }

    Ok(cores)
}
