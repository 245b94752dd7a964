//! Memory usage percentage

use crate::error::{MetricsError, MetricsResult};
use crate::types::MemorySnapshot;

pub fn used_percent(memory: MemorySnapshot) -> MetricsResult<f64> {
    if memory.total_bytes == 0 {
        return Err(MetricsError::MemoryUnavailable(
            "total memory is zero".to_string(),
        ));
    }

    let used = memory.total_bytes.saturating_sub(memory.free_bytes);
    Ok((used as f64 / memory.total_bytes as f64) * 100.0)
}
