//! Host collaborators: filesystem access and OS introspection
//!
//! The estimators in [`crate::info`] reach the host only through these traits.

mod fs;
mod probe;

use std::io;
use std::path::{Path, PathBuf};

use crate::error::MetricsResult;
use crate::types::{CpuTimes, MemorySnapshot};

pub use fs::OsFileSystem;
pub use probe::{parse_proc_stat, SysinfoProbe};

/// What a non-following stat reports for a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File { len: u64 },
    Dir,
    Symlink,
    Other,
}

/// Filesystem operations used by the directory walk and disk estimator
pub trait FileSystem {
    /// Resolve `path` against the current directory without touching the disk
    fn absolute(&self, path: &Path) -> io::Result<PathBuf>;

    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents; existing directories are fine
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Full paths of the entries directly inside `path`.
    ///
    /// Entries that fail to enumerate are returned as `Err` items so the
    /// caller decides what to do with them.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<io::Result<PathBuf>>>;

    /// Stat `path` without following symlinks
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;
}

/// OS introspection used by the estimators
pub trait HostProbe {
    fn memory(&self) -> MetricsResult<MemorySnapshot>;

    /// Tick counters for every logical core
    fn cpu_times(&self) -> MetricsResult<Vec<CpuTimes>>;
}
