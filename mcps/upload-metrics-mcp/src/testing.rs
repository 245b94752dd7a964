//! In-memory fakes for the host traits

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{MetricsError, MetricsResult};
use crate::host::{EntryKind, FileSystem, HostProbe};
use crate::types::{CpuTimes, MemorySnapshot};

pub const GIB: u64 = 1024 * 1024 * 1024;

#[derive(Default)]
pub struct FakeFileSystem {
    entries: RefCell<BTreeMap<PathBuf, EntryKind>>,
    deny_list: HashSet<PathBuf>,
    deny_stat: HashSet<PathBuf>,
    fail_create: bool,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(self, path: &str) -> Self {
        self.insert(path, EntryKind::Dir)
    }

    pub fn file(self, path: &str, len: u64) -> Self {
        self.insert(path, EntryKind::File { len })
    }

    pub fn symlink(self, path: &str) -> Self {
        self.insert(path, EntryKind::Symlink)
    }

    pub fn deny_list(mut self, path: &str) -> Self {
        self.deny_list.insert(PathBuf::from(path));
        self
    }

    pub fn deny_stat(mut self, path: &str) -> Self {
        self.deny_stat.insert(PathBuf::from(path));
        self
    }

    pub fn fail_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.entries.borrow().get(Path::new(path)) == Some(&EntryKind::Dir)
    }

    fn insert(self, path: &str, kind: EntryKind) -> Self {
        self.entries.borrow_mut().insert(PathBuf::from(path), kind);
        self
    }
}

fn denied(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("{} denied", path.display()),
    )
}

impl FileSystem for FakeFileSystem {
    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        Ok(Path::new("/work").join(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.entries.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.fail_create {
            return Err(denied(path));
        }
        let mut entries = self.entries.borrow_mut();
        for ancestor in path.ancestors() {
            entries.entry(ancestor.to_path_buf()).or_insert(EntryKind::Dir);
        }
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<io::Result<PathBuf>>> {
        if self.deny_list.contains(path) {
            return Err(denied(path));
        }
        let entries = self.entries.borrow();
        match entries.get(path) {
            Some(EntryKind::Dir) => Ok(entries
                .keys()
                .filter(|p| p.parent() == Some(path))
                .map(|p| Ok(p.clone()))
                .collect()),
            Some(_) => Err(io::Error::other("not a directory")),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        if self.deny_stat.contains(path) {
            return Err(denied(path));
        }
        self.entries
            .borrow()
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

/// Probe returning fixed readings, or failing on demand
#[derive(Clone, Default)]
pub struct FakeProbe {
    pub memory: Option<MemorySnapshot>,
    pub cpus: Option<Vec<CpuTimes>>,
}

impl FakeProbe {
    pub fn new(total_gib: u64, free_gib: u64) -> Self {
        Self {
            memory: Some(MemorySnapshot {
                total_bytes: total_gib * GIB,
                free_bytes: free_gib * GIB,
            }),
            cpus: Some(vec![
                CpuTimes {
                    user: 20,
                    nice: 0,
                    sys: 5,
                    idle: 75,
                    irq: 0,
                },
                CpuTimes {
                    user: 40,
                    nice: 5,
                    sys: 5,
                    idle: 50,
                    irq: 0,
                },
            ]),
        }
    }

    /// Every query fails
    pub fn broken() -> Self {
        Self::default()
    }
}

impl HostProbe for FakeProbe {
    fn memory(&self) -> MetricsResult<MemorySnapshot> {
        self.memory
            .ok_or_else(|| MetricsError::Probe("memory query failed".to_string()))
    }

    fn cpu_times(&self) -> MetricsResult<Vec<CpuTimes>> {
        self.cpus
            .clone()
            .ok_or_else(|| MetricsError::Probe("cpu query failed".to_string()))
    }
}
