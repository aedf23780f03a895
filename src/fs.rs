//! Filesystem access used by the scanner.
//!
//! The scanner never touches `std::fs` directly; it goes through the
//! [`FileSystem`] trait so that the walk can run against an in-memory tree
//! in tests and so that metadata is only fetched for entries that are reported.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::platform;

/// One child of a directory as seen by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Final path component.
    pub name: String,
    /// Start path joined with every component down to this entry.
    pub path: PathBuf,
    /// True only for real directories; symlinks are never treated as directories.
    pub is_dir: bool,
}

/// Timestamps resolved for a reported entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub modified: SystemTime,
    /// Best-effort creation time, see [`crate::platform::created_time`].
    pub created: SystemTime,
}

/// Source of directory listings and entry metadata.
pub trait FileSystem {
    /// Absolute form of `path` with trailing separators removed.
    fn absolute(&self, path: &Path) -> io::Result<PathBuf>;

    /// Children of `path`, sorted by name.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Timestamps for `path`, without following a final symlink.
    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata>;
}

/// [`FileSystem`] backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        let absolute = std::path::absolute(path)?;
        // Re-collecting the components drops trailing separators and `.` segments.
        Ok(absolute.components().collect())
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(path)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read directory entry");
                    continue;
                }
            };
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(path = %entry.path().display(), error = %e, "failed to read file type");
                    continue;
                }
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.path(),
                is_dir: file_type.is_dir(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        let metadata = std::fs::symlink_metadata(path)?;
        let modified = metadata.modified()?;
        let created = platform::created_time(&metadata).unwrap_or(modified);
        Ok(EntryMetadata { modified, created })
    }
}
