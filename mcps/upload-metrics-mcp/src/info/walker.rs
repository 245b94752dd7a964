//! Directory size walker
//!
//! Best-effort: anything that cannot be listed or stat'ed adds to
//! [`DirectorySize::skipped`] and contributes zero bytes. Symlinks are
//! neither followed nor counted.

use std::path::{Path, PathBuf};

use crate::host::{EntryKind, FileSystem};
use crate::types::DirectorySize;

/// Sum the sizes of all regular files under `root`
pub fn directory_size<F: FileSystem>(fs: &F, root: &Path) -> DirectorySize {
    let mut size = DirectorySize::default();
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Skipping unreadable directory {}: {}", dir.display(), e);
                size.skipped += 1;
                continue;
            }
        };

        for entry in entries {
            let kind = entry.and_then(|path| fs.entry_kind(&path).map(|kind| (path, kind)));
            match kind {
                Ok((path, EntryKind::Dir)) => pending.push(path),
                Ok((_, EntryKind::File { len })) => {
                    size.bytes = size.bytes.saturating_add(len);
                    size.files += 1;
                }
                Ok((_, EntryKind::Symlink | EntryKind::Other)) => {}
                Err(e) => {
                    tracing::debug!("Skipping entry under {}: {}", dir.display(), e);
                    size.skipped += 1;
                }
            }
        }
    }

    size
}
