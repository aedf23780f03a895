//! folder-scan - list the entries below a folder with timestamps, filtered by depth, name and type

pub mod error;
pub mod fs;
pub mod keywords;
pub mod logging;
pub mod output;
pub mod platform;
pub mod scan;
pub mod summary;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result, ScanError};
pub use fs::{DirEntry, EntryMetadata, FileSystem, OsFileSystem};
pub use keywords::KeywordSet;
pub use output::{Destination, OutputFormat, Report, ReportWriter, ScanRecord, build_report, save_report};
pub use scan::{FilenameMode, MaxDepth, OwnedMatch, ScanConfig, ScanMatch, Scanner};
pub use summary::{ScanStats, print_summary};
