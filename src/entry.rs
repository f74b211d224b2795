//! Directory entries: listing, classification and ordering
//!
//! One directory level is processed as a batch: its children are listed,
//! each child is classified into a `DirectoryEntry`, and the batch is sorted
//! so that directories come first and names ascend within each group.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExploreError, Result};

/// What a classified entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A classified filesystem entry found directly inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Path as produced by joining the listed directory and the child name
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Size in bytes; always 0 for directories
    pub size_bytes: u64,
    /// The entry itself is a symbolic link (its target was classified)
    pub is_symlink: bool,
}

impl DirectoryEntry {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            size_bytes: 0,
            is_symlink: false,
        }
    }

    pub fn file(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            size_bytes,
            is_symlink: false,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// List the immediate children of `dir`, in the order the filesystem returns them.
///
/// Children that vanish or fail mid-iteration are dropped; failing to open the
/// directory at all is a `List` error.
pub fn list_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| ExploreError::List {
        path: dir.to_path_buf(),
        source,
    })?;

    Ok(entries
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.path()),
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "dropping unreadable child");
                None
            }
        })
        .collect())
}

/// Retrieve metadata for `path` and classify it.
///
/// Symlinks are followed. Returns `Ok(None)` for entries that are neither a
/// regular file nor a directory (sockets, FIFOs, devices).
pub fn classify(path: &Path) -> Result<Option<DirectoryEntry>> {
    let stat_error = |source| ExploreError::Stat {
        path: path.to_path_buf(),
        source,
    };

    let meta = fs::metadata(path).map_err(stat_error)?;
    let is_symlink = fs::symlink_metadata(path)
        .map_err(stat_error)?
        .file_type()
        .is_symlink();

    let entry = if meta.is_dir() {
        DirectoryEntry {
            is_symlink,
            ..DirectoryEntry::directory(path)
        }
    } else if meta.is_file() {
        DirectoryEntry {
            is_symlink,
            ..DirectoryEntry::file(path, meta.len())
        }
    } else {
        return Ok(None);
    };

    Ok(Some(entry))
}

/// Order in which entries of one directory level are displayed and visited.
fn display_order(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
}

/// Sort a batch: directories before files, then ascending by path.
pub fn sort_entries(mut entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    entries.sort_by(display_order);
    entries
}
