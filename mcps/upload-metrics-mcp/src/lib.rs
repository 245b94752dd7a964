//! Upload Metrics MCP Library
//!
//! Estimates uploads directory disk usage and host CPU/memory health.
//!
//! Used bytes are measured by walking the directory. Total and free capacity
//! are *heuristic*: total is ten times physical memory, and free is never
//! reported below five times free memory. Treat those two figures as coarse
//! health signals only.
//!
//! Every entry point is infallible. Failures are logged through `tracing`
//! and replaced with safe defaults.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use upload_metrics_mcp::{get_disk_usage, get_system_metrics};
//!
//! let usage = get_disk_usage(None);
//! let metrics = get_system_metrics();
//! ```
//!
//! For tests or custom hosts, call the functions in [`info`] with your own
//! [`host::FileSystem`] and [`host::HostProbe`].
//!
//! # Usage as Binary
//!
//! Run directly: `upload-metrics-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "upload-metrics": { "command": "./upload-metrics-mcp" } } }
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod info;
pub mod init;
pub mod server;
pub mod types;

#[cfg(test)]
mod testing;

use std::path::Path;

pub use config::Config;
pub use error::{MetricsError, MetricsResult};
pub use host::{FileSystem, HostProbe, OsFileSystem, SysinfoProbe};
pub use info::collect_system_metrics;
pub use info::disk::{estimate_disk_usage, free_space, try_estimate_disk_usage};
pub use info::walker::directory_size;
pub use server::UploadMetricsMcpServer;
pub use types::{CpuTimes, DirectorySize, DiskUsage, FreeSpace, MemorySnapshot, SystemMetrics};

/// Directory measured when no path is given
pub const DEFAULT_UPLOADS_DIR: &str = "./uploads";

/// [`estimate_disk_usage`] on the real host; `None` means `./uploads`
pub fn get_disk_usage(path: Option<&Path>) -> DiskUsage {
    let path = path.unwrap_or(Path::new(DEFAULT_UPLOADS_DIR));
    estimate_disk_usage(&OsFileSystem, &SysinfoProbe::new(), path)
}

/// [`free_space`] on the real host; `None` means `./uploads`
pub fn get_free_space(path: Option<&Path>) -> u64 {
    let path = path.unwrap_or(Path::new(DEFAULT_UPLOADS_DIR));
    free_space(&OsFileSystem, &SysinfoProbe::new(), path)
}

/// [`collect_system_metrics`] on the real host for `./uploads`
pub fn get_system_metrics() -> SystemMetrics {
    collect_system_metrics(
        &OsFileSystem,
        &SysinfoProbe::new(),
        Path::new(DEFAULT_UPLOADS_DIR),
    )
}
