//! JSON report

use std::io::{self, Write};

use super::ReportWriter;
use super::record::ScanRecord;

/// Buffers records and writes them as one pretty-printed array on finish.
pub struct JsonWriter<W: Write> {
    out: W,
    records: Vec<ScanRecord>,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            records: Vec::new(),
        }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_record(&mut self, record: &ScanRecord) -> io::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.records).map_err(io::Error::other)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
