//! Excel workbook report

use std::io::{self, Write};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use super::ReportWriter;
use super::record::ScanRecord;

pub const SHEET_NAME: &str = "Scan Results";

const HEADERS: [&str; 5] = ["Name", "Type", "Relative Path", "Modified", "Created"];
const COLUMN_WIDTHS: [f64; 5] = [35.0, 10.0, 60.0, 22.0, 22.0];

/// Fills a single worksheet and writes the whole workbook on finish.
pub struct XlsxWriter<W: Write> {
    out: W,
    worksheet: Worksheet,
    /// Next free row; row 0 holds the header.
    row: u32,
}

fn to_io(e: XlsxError) -> io::Error {
    io::Error::other(e.to_string())
}

impl<W: Write> XlsxWriter<W> {
    /// Create the sheet with a bold header row and fixed column widths.
    pub fn new(out: W) -> io::Result<Self> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(SHEET_NAME).map_err(to_io)?;

        let bold = Format::new().set_bold();
        for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
            let col = col as u16;
            worksheet
                .write_string_with_format(0, col, *header, &bold)
                .map_err(to_io)?;
            worksheet.set_column_width(col, width).map_err(to_io)?;
        }

        Ok(Self {
            out,
            worksheet,
            row: 1,
        })
    }

    /// Data rows written so far, header excluded.
    pub fn rows_written(&self) -> u32 {
        self.row - 1
    }
}

impl<W: Write> ReportWriter for XlsxWriter<W> {
    fn write_record(&mut self, record: &ScanRecord) -> io::Result<()> {
        let cells = [
            record.name.as_str(),
            record.kind.label(),
            record.relative_path.as_str(),
            record.modified.as_str(),
            record.created.as_str(),
        ];
        for (col, value) in cells.iter().enumerate() {
            self.worksheet
                .write_string(self.row, col as u16, *value)
                .map_err(to_io)?;
        }
        self.row += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let mut workbook = Workbook::new();
        workbook.push_worksheet(std::mem::replace(&mut self.worksheet, Worksheet::new()));
        let buffer = workbook.save_to_buffer().map_err(to_io)?;
        self.out.write_all(&buffer)?;
        self.out.flush()
    }
}
