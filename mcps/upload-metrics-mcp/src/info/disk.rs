//! Heuristic disk usage for the uploads directory
//!
//! No filesystem capacity query is made. `used` comes from walking the
//! directory, `total` and `free` are extrapolated from host memory (see
//! [`DiskUsage::from_estimate`]).

use std::path::Path;

use crate::error::{MetricsError, MetricsResult};
use crate::host::{FileSystem, HostProbe};
use crate::info::walker::directory_size;
use crate::types::{DiskUsage, FALLBACK_FREE_BYTES};

/// Estimate disk usage for `path`, creating the directory if it is missing.
///
/// Never fails: on any error the failure is logged and
/// [`DiskUsage::fallback`] is returned.
pub fn estimate_disk_usage<F, P>(fs: &F, probe: &P, path: &Path) -> DiskUsage
where
    F: FileSystem,
    P: HostProbe,
{
    match try_estimate_disk_usage(fs, probe, path) {
        Ok(usage) => usage,
        Err(e) => {
            tracing::error!("Error getting disk usage for {}: {}", path.display(), e);
            DiskUsage::fallback()
        }
    }
}

/// Fallible core of [`estimate_disk_usage`]
pub fn try_estimate_disk_usage<F, P>(fs: &F, probe: &P, path: &Path) -> MetricsResult<DiskUsage>
where
    F: FileSystem,
    P: HostProbe,
{
    let absolute = fs
        .absolute(path)
        .map_err(|source| MetricsError::SetupFailed {
            path: path.to_path_buf(),
            source,
        })?;

    if !fs.exists(&absolute) {
        fs.create_dir_all(&absolute)
            .map_err(|source| MetricsError::SetupFailed {
                path: absolute.clone(),
                source,
            })?;
        tracing::info!("Created uploads directory {}", absolute.display());
    }

    let walked = directory_size(fs, &absolute);
    let usage = DiskUsage::from_estimate(walked.bytes, probe.memory()?);

    tracing::debug!(
        path = %absolute.display(),
        files = walked.files,
        skipped = walked.skipped,
        used = usage.used,
        total = usage.total,
        free = usage.free,
        "Estimated disk usage"
    );

    Ok(usage)
}

/// Estimated free bytes for `path`, or 100 GiB when estimation fails
pub fn free_space<F, P>(fs: &F, probe: &P, path: &Path) -> u64
where
    F: FileSystem,
    P: HostProbe,
{
    match try_estimate_disk_usage(fs, probe, path) {
        Ok(usage) => usage.free,
        Err(e) => {
            tracing::error!("Error getting free space for {}: {}", path.display(), e);
            FALLBACK_FREE_BYTES
        }
    }
}
