//! Flat, serializable view of a reported entry.

use std::time::SystemTime;

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::scan::ScanMatch;

/// Timestamp layout used in every report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Folder => "Folder",
        }
    }
}

/// One row of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub relative_path: String,
    pub modified: String,
    pub created: String,
}

impl ScanRecord {
    /// Build a record with timestamps rendered in local time.
    pub fn from_match(m: &ScanMatch<'_>) -> Self {
        Self::from_match_in(m, &Local)
    }

    /// Build a record with timestamps rendered in `tz`.
    pub fn from_match_in<Tz>(m: &ScanMatch<'_>, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            name: m.name().to_string(),
            kind: if m.is_dir() {
                EntryKind::Folder
            } else {
                EntryKind::File
            },
            relative_path: m.relative_path.clone(),
            modified: format_timestamp(m.modified(), tz),
            created: format_timestamp(m.created(), tz),
        }
    }
}

pub fn format_timestamp<Tz>(time: SystemTime, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    DateTime::<chrono::Utc>::from(time)
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
