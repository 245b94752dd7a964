//! Disk usage types

use serde::{Deserialize, Serialize};

use super::MemorySnapshot;

const GIB: u64 = 1024 * 1024 * 1024;

/// Estimated total disk size as a multiple of total physical memory
pub const DISK_TO_MEMORY_RATIO: u64 = 10;

/// Free space is never reported below this multiple of free memory
pub const FREE_MEMORY_FLOOR_RATIO: u64 = 5;

/// Total capacity reported when estimation fails
pub const FALLBACK_TOTAL_BYTES: u64 = 500 * GIB;

/// Free capacity reported when estimation fails
pub const FALLBACK_FREE_BYTES: u64 = 100 * GIB;

/// Disk usage snapshot for an uploads directory.
///
/// Only `used` is measured. `total` and `free` are extrapolated from host
/// memory and are suitable for coarse health signaling, not capacity planning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskUsage {
    /// Estimated total capacity in bytes
    pub total: u64,
    /// Sum of file sizes under the directory
    pub used: u64,
    /// Estimated free capacity in bytes
    pub free: u64,
    /// `used / total * 100`, may exceed 100 when `used` outgrows the estimate
    pub used_percentage: f64,
}

impl DiskUsage {
    /// Extrapolate capacity from memory for a measured `used` byte count
    pub fn from_estimate(used: u64, memory: MemorySnapshot) -> Self {
        let total = memory.total_bytes.saturating_mul(DISK_TO_MEMORY_RATIO);
        let free = total
            .saturating_sub(used)
            .max(memory.free_bytes.saturating_mul(FREE_MEMORY_FLOOR_RATIO));

        Self {
            total,
            used,
            free,
            used_percentage: percentage(used, total),
        }
    }

    /// Fixed safe default: 500 GiB total, 100 GiB free
    pub fn fallback() -> Self {
        let total = FALLBACK_TOTAL_BYTES;
        let free = FALLBACK_FREE_BYTES;
        let used = total - free;

        Self {
            total,
            used,
            free,
            used_percentage: percentage(used, total),
        }
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}

/// Outcome of a directory walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySize {
    /// Sum of regular file sizes in bytes
    pub bytes: u64,
    /// Number of regular files counted
    pub files: u64,
    /// Entries that could not be listed or stat'ed
    pub skipped: u64,
}

/// Free space reading for a single directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSpace {
    pub path: String,
    pub free_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory(total_gib: u64, free_gib: u64) -> MemorySnapshot {
        MemorySnapshot {
            total_bytes: total_gib * GIB,
            free_bytes: free_gib * GIB,
        }
    }

    #[test]
    fn test_total_is_ten_times_memory() {
        let usage = DiskUsage::from_estimate(0, memory(16, 2));
        assert_eq!(usage.total, 160 * GIB);
        assert_eq!(usage.free, 160 * GIB);
        assert_eq!(usage.used_percentage, 0.0);
    }

    #[test]
    fn test_free_floor_when_used_exceeds_total() {
        let usage = DiskUsage::from_estimate(200 * GIB, memory(16, 2));
        assert_eq!(usage.total, 160 * GIB);
        assert_eq!(usage.free, 10 * GIB);
        assert_eq!(usage.used_percentage, 125.0);
    }

    #[test]
    fn test_free_prefers_remaining_capacity() {
        let usage = DiskUsage::from_estimate(40 * GIB, memory(16, 2));
        assert_eq!(usage.free, 120 * GIB);
        assert_eq!(usage.used_percentage, 25.0);
    }

    #[test]
    fn test_zero_memory_gives_zero_percentage() {
        let usage = DiskUsage::from_estimate(4096, memory(0, 0));
        assert_eq!(usage.total, 0);
        assert_eq!(usage.free, 0);
        assert_eq!(usage.used_percentage, 0.0);
    }

    #[test]
    fn test_fallback_values() {
        let usage = DiskUsage::fallback();
        assert_eq!(usage.total, 500 * GIB);
        assert_eq!(usage.free, 100 * GIB);
        assert_eq!(usage.used, 400 * GIB);
        assert_eq!(usage.used_percentage, 80.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(DiskUsage::fallback()).unwrap();
        assert!(json.get("usedPercentage").is_some());
        assert!(json.get("used_percentage").is_none());
    }
}
