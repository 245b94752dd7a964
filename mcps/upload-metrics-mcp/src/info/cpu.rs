//! CPU busy percentage from cumulative tick counters

use crate::error::{MetricsError, MetricsResult};
use crate::types::CpuTimes;

/// `100 - 100 * idle / total` summed across all cores.
///
/// The counters are cumulative since boot, so this is the average busy share
/// over the whole uptime rather than a recent rate. Sample twice and
/// difference the counters for a rate.
pub fn busy_percent(cores: &[CpuTimes]) -> MetricsResult<f64> {
    let (idle, total) = cores.iter().fold((0u64, 0u64), |(idle, total), core| {
        (idle.saturating_add(core.idle), total.saturating_add(core.total()))
    });

    if total == 0 {
        return Err(MetricsError::CpuTimesUnavailable(
            "tick counters sum to zero".to_string(),
        ));
    }

    Ok(100.0 - (100.0 * idle as f64 / total as f64))
}
