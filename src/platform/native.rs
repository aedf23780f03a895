//! Native birth time (macOS `st_birthtime`, Windows `ftCreationTime`).

use std::fs::Metadata;
use std::time::SystemTime;

pub fn created_time(metadata: &Metadata) -> Option<SystemTime> {
    metadata.created().ok()
}
