//! Depth-first traversal with a fixed depth baseline.
//!
//! Depth is never carried through the recursion. Every directory's absolute
//! form is recomputed and its component count compared against the baseline
//! taken once from the start path, so symlinked or oddly spelled start paths
//! cannot make the two drift apart.

use std::path::Path;

use crate::fs::{DirEntry, FileSystem};
use crate::summary::ScanStats;

use super::config::ScanConfig;
use super::filter::EntryFilter;
use super::utils::depth_from;
use super::walker::ScanMatch;

/// Callback receiving every reported entry in visitation order.
pub type MatchCallback<'c> = dyn FnMut(&ScanMatch<'_>) + 'c;

/// State shared by every step of one walk.
pub struct Traversal<'a, F: FileSystem> {
    config: &'a ScanConfig,
    fs: &'a F,
    filter: EntryFilter<'a>,
    baseline: usize,
}

impl<'a, F: FileSystem> Traversal<'a, F> {
    /// `baseline` is the component count of the start path's absolute form.
    pub fn new(config: &'a ScanConfig, fs: &'a F, baseline: usize) -> Self {
        Self {
            config,
            fs,
            filter: EntryFilter::new(config),
            baseline,
        }
    }

    /// Visit every child of `dir`, recursing into directories that pass the descent test.
    pub fn walk_children(&self, dir: &Path, on_match: &mut MatchCallback<'_>, stats: &mut ScanStats) {
        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "failed to list directory");
                stats.skipped += 1;
                return;
            }
        };

        for entry in &entries {
            self.visit(entry, on_match, stats);
        }
    }

    fn visit(&self, entry: &DirEntry, on_match: &mut MatchCallback<'_>, stats: &mut ScanStats) {
        if self.filter.should_report(entry) {
            self.report(entry, on_match, stats);
        }

        if entry.is_dir && self.should_descend(entry, stats) {
            self.walk_children(&entry.path, on_match, stats);
        }
    }

    fn report(&self, entry: &DirEntry, on_match: &mut MatchCallback<'_>, stats: &mut ScanStats) {
        let metadata = match self.fs.metadata(&entry.path) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), error = %e, "failed to read entry metadata");
                stats.skipped += 1;
                return;
            }
        };

        on_match(&ScanMatch::new(entry, self.config.start_path(), metadata));
        stats.record_match(entry.is_dir);
    }

    /// Depth limit first, then stop keywords. A pruned directory keeps its own report.
    fn should_descend(&self, entry: &DirEntry, stats: &mut ScanStats) -> bool {
        let absolute = match self.fs.absolute(&entry.path) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), error = %e, "failed to resolve absolute path");
                stats.skipped += 1;
                return false;
            }
        };

        let depth = depth_from(self.baseline, &absolute);
        if self.config.max_depth.prunes(depth) {
            tracing::debug!(path = %entry.path.display(), depth, "depth limit reached, not descending");
            stats.pruned_by_depth += 1;
            return false;
        }

        if let Some(keyword) = self.filter.stop_keyword(entry) {
            tracing::info!(
                path = %entry.path.display(),
                keyword,
                "stop keyword hit, recording directory but skipping its contents"
            );
            stats.pruned_by_keyword += 1;
            return false;
        }

        true
    }
}
