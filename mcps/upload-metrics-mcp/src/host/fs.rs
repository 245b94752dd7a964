//! `std::fs` backed filesystem

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{EntryKind, FileSystem};

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        std::path::absolute(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<io::Result<PathBuf>>> {
        Ok(fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect())
    }

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = fs::symlink_metadata(path)?;
        let file_type = metadata.file_type();

        Ok(if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File {
                len: metadata.len(),
            }
        } else {
            EntryKind::Other
        })
    }
}
