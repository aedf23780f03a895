//! Output configuration types

use std::fmt;
use std::path::{Path, PathBuf};

/// Report file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
    /// Excel workbook with a single sheet
    Xlsx,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Xlsx => "xlsx",
        }
    }

    /// File name used when no output path is given.
    pub fn default_file_name(&self) -> String {
        format!("scan_results.{}", self.extension())
    }
}

/// Where a finished report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` means stdout; no value means the default file inside `start_dir`.
    pub fn resolve(requested: Option<&Path>, start_dir: &Path, format: OutputFormat) -> Self {
        match requested {
            Some(p) if p == Path::new("-") => Destination::Stdout,
            Some(p) => Destination::File(p.to_path_buf()),
            None => Destination::File(start_dir.join(format.default_file_name())),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("<stdout>"),
            Destination::File(p) => write!(f, "{}", p.display()),
        }
    }
}
