//! Best-effort creation time for a filesystem entry.
//!
//! Exactly one variant is compiled per target. Every variant falls back to the
//! modification time when the platform has no usable creation field.

use std::fs::Metadata;
use std::time::SystemTime;

#[cfg(any(target_os = "macos", target_os = "ios", windows))]
mod native;
#[cfg(any(target_os = "macos", target_os = "ios", windows))]
use self::native as imp;

#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios"))))]
mod status_change;
#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios"))))]
use self::status_change as imp;

#[cfg(not(any(unix, windows)))]
mod fallback;
#[cfg(not(any(unix, windows)))]
use self::fallback as imp;

/// Creation time of the entry described by `metadata`, or `None` when neither
/// the platform field nor the modification time is available.
pub fn created_time(metadata: &Metadata) -> Option<SystemTime> {
    imp::created_time(metadata).or_else(|| metadata.modified().ok())
}
