//! Scan counters and the completion summary printed by the CLI.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Counters accumulated over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Directories passed to the match callback
    pub folders: usize,
    /// Non-directory entries passed to the match callback
    pub files: usize,
    /// Entries dropped because their metadata, listing or absolute path failed
    pub skipped: usize,
    /// Directories not entered because of the depth limit
    pub pruned_by_depth: usize,
    /// Directories not entered because of a stop keyword
    pub pruned_by_keyword: usize,
}

impl ScanStats {
    pub fn record_match(&mut self, is_dir: bool) {
        if is_dir {
            self.folders += 1;
        } else {
            self.files += 1;
        }
    }

    pub fn reported(&self) -> usize {
        self.folders + self.files
    }
}

/// Print a short completion summary to stderr.
pub fn print_summary(
    stats: &ScanStats,
    elapsed: Duration,
    destination: &str,
    use_color: bool,
) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    write_summary(&mut stderr, stats, elapsed, destination)
}

fn write_summary<W: WriteColor>(
    out: &mut W,
    stats: &ScanStats,
    elapsed: Duration,
    destination: &str,
) -> io::Result<()> {
    // Millisecond precision is plenty for a human-facing line.
    let elapsed = Duration::from_millis(elapsed.as_millis() as u64);

    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "Scan complete")?;
    out.reset()?;
    writeln!(
        out,
        ": {} folders, {} files in {}",
        stats.folders,
        stats.files,
        humantime::format_duration(elapsed)
    )?;

    if stats.skipped > 0 {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "{} entries skipped (see log)", stats.skipped)?;
        out.reset()?;
    }

    write!(out, "Results saved to ")?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{}", destination)?;
    out.reset()?;

    Ok(())
}
