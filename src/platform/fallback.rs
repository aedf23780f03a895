use std::fs::Metadata;
use std::time::SystemTime;

pub fn created_time(_metadata: &Metadata) -> Option<SystemTime> {
    None
}
