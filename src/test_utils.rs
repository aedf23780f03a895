//! Test utilities: temporary directory trees and an in-memory filesystem.
//!
//! This module is only compiled for tests, benchmarks and the `test-utils` feature.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

use crate::fs::{DirEntry, EntryMetadata, FileSystem};

/// A temporary directory tree on disk, removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a directory and its parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory [`FileSystem`] with per-path fault injection.
///
/// Paths are absolute and stored without trailing separators. Every entry
/// carries the same fixed timestamps.
#[derive(Debug, Clone)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, bool>,
    failing_metadata: HashSet<PathBuf>,
    failing_absolute: HashSet<PathBuf>,
    failing_read_dir: HashSet<PathBuf>,
    timestamp: SystemTime,
}

impl MemoryFs {
    /// An empty tree containing only the directory `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let mut fs = Self {
            nodes: BTreeMap::new(),
            failing_metadata: HashSet::new(),
            failing_absolute: HashSet::new(),
            failing_read_dir: HashSet::new(),
            timestamp: UNIX_EPOCH + Duration::from_secs(1_700_000_000),
        };
        fs.add_dir(root);
        fs
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), true);
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), false);
    }

    pub fn fail_metadata(&mut self, path: impl AsRef<Path>) {
        self.failing_metadata.insert(normalize(path.as_ref()));
    }

    pub fn fail_absolute(&mut self, path: impl AsRef<Path>) {
        self.failing_absolute.insert(normalize(path.as_ref()));
    }

    pub fn fail_read_dir(&mut self, path: impl AsRef<Path>) {
        self.failing_read_dir.insert(normalize(path.as_ref()));
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    fn insert(&mut self, path: &Path, is_dir: bool) {
        let path = normalize(path);
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes.entry(ancestor.to_path_buf()).or_insert(true);
        }
        self.nodes.insert(path, is_dir);
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

fn injected(path: &Path, what: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("injected {} failure for {}", what, path.display()),
    )
}

impl FileSystem for MemoryFs {
    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        let key = normalize(path);
        if self.failing_absolute.contains(&key) {
            return Err(injected(path, "absolute"));
        }
        Ok(normalize(&Path::new("/").join(key)))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let key = normalize(path);
        if self.failing_read_dir.contains(&key) {
            return Err(injected(path, "read_dir"));
        }
        match self.nodes.get(&key) {
            Some(true) => {}
            Some(false) => {
                return Err(io::Error::other("not a directory"));
            }
            None => return Err(io::Error::from(io::ErrorKind::NotFound)),
        }

        let mut entries: Vec<DirEntry> = self
            .nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(key.as_path()))
            .filter_map(|(p, &is_dir)| {
                let name = p.file_name()?.to_string_lossy().to_string();
                Some(DirEntry {
                    path: path.join(&name),
                    name,
                    is_dir,
                })
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        let key = normalize(path);
        if self.failing_metadata.contains(&key) {
            return Err(injected(path, "metadata"));
        }
        if !self.nodes.contains_key(&key) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(EntryMetadata {
            modified: self.timestamp,
            created: self.timestamp,
        })
    }
}
