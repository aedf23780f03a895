//! Error types for scanning and exporting.
//!
//! Only [`ScanError`] can escape a traversal. Failures on individual entries
//! are logged and skipped inside the walker and never surface here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for operations that can fail with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failure of a scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The start path could not be turned into an absolute, existing path.
    #[error("cannot resolve start path '{}': {source}", path.display())]
    StartPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Top-level error for the scan-and-export flow.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A record could not be rendered into the in-memory report.
    #[error("failed to render results: {0}")]
    Render(#[source] io::Error),

    /// Saving the report failed.
    #[error("cannot write results to '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A command-line value was rejected before scanning.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure was a permissions problem on the output location.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Output { source, .. } if source.kind() == io::ErrorKind::PermissionDenied)
    }
}
