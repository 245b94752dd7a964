//! Error types for metric collection
//!
//! These never cross the public entry points: `estimate_disk_usage`,
//! `free_space`, and `collect_system_metrics` log them and return safe
//! defaults instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot prepare directory {}: {source}", path.display())]
    SetupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CPU tick counters unavailable: {0}")]
    CpuTimesUnavailable(String),

    #[error("Memory information unavailable: {0}")]
    MemoryUnavailable(String),

    #[error("Host probe failed: {0}")]
    Probe(String),
}

impl MetricsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MetricsError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type MetricsResult<T> = Result<T, MetricsError>;
