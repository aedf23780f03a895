//! Scanner - the entry point of a scan

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::ScanError;
use crate::fs::{DirEntry, EntryMetadata, FileSystem, OsFileSystem};
use crate::summary::ScanStats;

use super::config::ScanConfig;
use super::traversal::Traversal;
use super::utils::{component_count, relative_slash_path};

/// One reported entry, handed to the match callback.
#[derive(Debug, Clone)]
pub struct ScanMatch<'a> {
    pub entry: &'a DirEntry,
    /// Path below the start path, `/`-separated.
    pub relative_path: String,
    pub metadata: EntryMetadata,
}

impl<'a> ScanMatch<'a> {
    pub fn new(entry: &'a DirEntry, start_path: &Path, metadata: EntryMetadata) -> Self {
        Self {
            entry,
            relative_path: relative_slash_path(&entry.path, start_path),
            metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn path(&self) -> &Path {
        &self.entry.path
    }

    pub fn is_dir(&self) -> bool {
        self.entry.is_dir
    }

    pub fn modified(&self) -> SystemTime {
        self.metadata.modified
    }

    pub fn created(&self) -> SystemTime {
        self.metadata.created
    }
}

/// Single-threaded, depth-first scanner.
///
/// The callback runs inline on the calling thread, once per reported entry,
/// parents before their children and siblings in name order.
pub struct Scanner<F: FileSystem = OsFileSystem> {
    config: ScanConfig,
    fs: F,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            fs: OsFileSystem,
        }
    }
}

impl<F: FileSystem> Scanner<F> {
    /// Replace the filesystem the scanner reads from.
    pub fn with_file_system<G: FileSystem>(self, fs: G) -> Scanner<G> {
        Scanner {
            config: self.config,
            fs,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Walk the tree below the start path.
    ///
    /// The start path itself is never reported. The only error returned is a
    /// start path that cannot be resolved; problems with individual entries
    /// are logged, counted in [`ScanStats::skipped`] and the walk continues.
    pub fn scan<C>(&self, mut on_match: C) -> Result<ScanStats, ScanError>
    where
        C: FnMut(&ScanMatch<'_>),
    {
        let start = self.config.start_path();
        let baseline = self.resolve_start(start)?;

        tracing::info!(
            path = %start.display(),
            max_depth = %self.config.max_depth,
            "starting scan"
        );

        let mut stats = ScanStats::default();
        let traversal = Traversal::new(&self.config, &self.fs, baseline);
        traversal.walk_children(start, &mut on_match, &mut stats);

        tracing::info!(
            path = %start.display(),
            folders = stats.folders,
            files = stats.files,
            skipped = stats.skipped,
            pruned_by_depth = stats.pruned_by_depth,
            pruned_by_keyword = stats.pruned_by_keyword,
            "scan complete"
        );

        Ok(stats)
    }

    /// Collect every match into a vector of owned records.
    pub fn collect(&self) -> Result<(Vec<OwnedMatch>, ScanStats), ScanError> {
        let mut matches = Vec::new();
        let stats = self.scan(|m| matches.push(OwnedMatch::from(m)))?;
        Ok((matches, stats))
    }

    /// Component count of the start path's absolute form.
    fn resolve_start(&self, start: &Path) -> Result<usize, ScanError> {
        let to_error = |source| ScanError::StartPath {
            path: start.to_path_buf(),
            source,
        };

        let absolute = self.fs.absolute(start).map_err(to_error)?;
        self.fs.metadata(start).map_err(to_error)?;
        Ok(component_count(&absolute))
    }
}

/// A [`ScanMatch`] detached from the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedMatch {
    pub name: String,
    pub path: PathBuf,
    pub relative_path: String,
    pub is_dir: bool,
    pub metadata: EntryMetadata,
}

impl From<&ScanMatch<'_>> for OwnedMatch {
    fn from(m: &ScanMatch<'_>) -> Self {
        Self {
            name: m.entry.name.clone(),
            path: m.entry.path.clone(),
            relative_path: m.relative_path.clone(),
            is_dir: m.entry.is_dir,
            metadata: m.metadata,
        }
    }
}
