//! Configuration for a single scan run.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::keywords::KeywordSet;

/// How deep the walk may descend below the start path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxDepth {
    /// Walk every reachable subdirectory.
    #[default]
    Unlimited,
    /// Directories at this depth or deeper are reported but not entered.
    Levels(NonZeroUsize),
}

impl MaxDepth {
    /// `None` for unlimited; zero is rejected.
    pub fn levels(levels: usize) -> Option<Self> {
        NonZeroUsize::new(levels).map(Self::Levels)
    }

    /// Whether a directory at `depth` must not be descended into.
    pub fn prunes(&self, depth: usize) -> bool {
        match self {
            Self::Unlimited => false,
            Self::Levels(max) => depth >= max.get(),
        }
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("unlimited"),
            Self::Levels(n) => write!(f, "{}", n),
        }
    }
}

/// Polarity of filename-keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilenameMode {
    /// Drop entries whose name contains a keyword.
    #[default]
    Blacklist,
    /// Keep only entries whose name contains a keyword.
    Whitelist,
}

impl FromStr for FilenameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blacklist" => Ok(Self::Blacklist),
            "whitelist" => Ok(Self::Whitelist),
            other => Err(format!(
                "unknown filename mode '{}', expected blacklist or whitelist",
                other
            )),
        }
    }
}

/// Immutable description of one scan.
///
/// Build it with [`ScanConfig::new`] and the `with_*` methods, then hand it
/// to a [`crate::Scanner`]. Keyword sets are normalized when they are parsed
/// and are never touched again.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub start_path: PathBuf,
    pub max_depth: MaxDepth,
    /// Directory-name substrings that stop descent.
    pub stop_keywords: KeywordSet,
    /// File extensions (with leading dot) that are never reported.
    pub exclude_extensions: KeywordSet,
    /// Name substrings interpreted according to `filename_mode`.
    pub filename_keywords: KeywordSet,
    pub filename_mode: FilenameMode,
}

impl ScanConfig {
    pub fn new(start_path: impl Into<PathBuf>) -> Self {
        Self {
            start_path: start_path.into(),
            max_depth: MaxDepth::Unlimited,
            stop_keywords: KeywordSet::default(),
            exclude_extensions: KeywordSet::default(),
            filename_keywords: KeywordSet::default(),
            filename_mode: FilenameMode::default(),
        }
    }

    pub fn start_path(&self) -> &Path {
        &self.start_path
    }

    pub fn with_max_depth(mut self, max_depth: MaxDepth) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_stop_keywords(mut self, keywords: KeywordSet) -> Self {
        self.stop_keywords = keywords;
        self
    }

    pub fn with_exclude_extensions(mut self, extensions: KeywordSet) -> Self {
        self.exclude_extensions = extensions;
        self
    }

    pub fn with_filename_keywords(mut self, keywords: KeywordSet, mode: FilenameMode) -> Self {
        self.filename_keywords = keywords;
        self.filename_mode = mode;
        self
    }
}
