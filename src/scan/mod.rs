//! Directory scanning
//!
//! A scan walks the tree below a start path depth-first, reports every entry
//! that passes the name filters through a callback, and decides for each
//! directory whether to descend:
//!
//! - the depth limit is checked against a baseline fixed before the walk
//! - a stop keyword in a directory's name keeps the directory but hides its contents

mod config;
mod filter;
mod traversal;
mod utils;
mod walker;

pub use config::{FilenameMode, MaxDepth, ScanConfig};
pub use filter::EntryFilter;
pub use traversal::MatchCallback;
pub use utils::{component_count, extension_of, relative_slash_path};
pub use walker::{OwnedMatch, ScanMatch, Scanner};
