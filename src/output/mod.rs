//! Report rendering and saving
//!
//! Reports are rendered into memory while the scan runs and written out once
//! the walk has finished, so a report saved inside the scanned directory never
//! lists itself.
//!
//! # Module Structure
//!
//! - `config` - Output format and destination
//! - `record` - Flat record built from each match
//! - `text` - `@`-delimited text writer
//! - `json` - JSON writer
//! - `xlsx` - Excel workbook writer

mod config;
mod json;
mod record;
mod text;
mod xlsx;

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::scan::Scanner;
use crate::summary::ScanStats;

pub use config::{Destination, OutputFormat};
pub use json::JsonWriter;
pub use record::{EntryKind, ScanRecord, TIMESTAMP_FORMAT, format_timestamp};
pub use text::TextWriter;
pub use xlsx::{SHEET_NAME, XlsxWriter};

/// Sink for rendered records.
pub trait ReportWriter {
    fn write_record(&mut self, record: &ScanRecord) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}

/// A fully rendered report, ready to be saved.
#[derive(Debug)]
pub struct Report {
    pub format: OutputFormat,
    pub bytes: Vec<u8>,
    pub stats: ScanStats,
}

/// Run the scan and render every match in `format`.
///
/// Writer failures do not interrupt the walk; the first one is returned once
/// the scan has finished.
pub fn build_report<F: FileSystem>(scanner: &Scanner<F>, format: OutputFormat) -> Result<Report> {
    let mut bytes = Vec::new();
    let stats = {
        let mut writer: Box<dyn ReportWriter + '_> = match format {
            OutputFormat::Txt => Box::new(TextWriter::new(&mut bytes).map_err(Error::Render)?),
            OutputFormat::Json => Box::new(JsonWriter::new(&mut bytes)),
            OutputFormat::Xlsx => Box::new(XlsxWriter::new(&mut bytes).map_err(Error::Render)?),
        };

        let mut first_error: Option<io::Error> = None;
        let stats = scanner.scan(|m| {
            if first_error.is_some() {
                return;
            }
            if let Err(e) = writer.write_record(&ScanRecord::from_match(m)) {
                first_error = Some(e);
            }
        })?;

        if let Some(e) = first_error {
            return Err(Error::Render(e));
        }
        writer.finish().map_err(Error::Render)?;
        stats
    };

    Ok(Report {
        format,
        bytes,
        stats,
    })
}

/// Write a rendered report to its destination.
pub fn save_report(report: &Report, destination: &Destination) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&report.bytes)
                .and_then(|_| stdout.flush())
                .map_err(|e| Error::output("<stdout>", e))
        }
        Destination::File(path) => {
            std::fs::write(path, &report.bytes).map_err(|e| Error::output(path, e))
        }
    }
}
