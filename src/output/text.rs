//! `@`-delimited text report

use std::io::{self, Write};

use super::ReportWriter;
use super::record::ScanRecord;

const HEADER: &str = "Name@Type@RelativePath@Modified@Created";
const SEPARATOR: char = '@';

/// Writes one `@`-joined line per record after a header line.
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    /// Create a writer and emit the header line.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", HEADER)?;
        Ok(Self { out })
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_record(&mut self, record: &ScanRecord) -> io::Result<()> {
        writeln!(
            self.out,
            "{name}{sep}{kind}{sep}{path}{sep}{modified}{sep}{created}",
            name = record.name,
            kind = record.kind.label(),
            path = record.relative_path,
            modified = record.modified,
            created = record.created,
            sep = SEPARATOR,
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
