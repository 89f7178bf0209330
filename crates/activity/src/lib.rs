//! `chaintrack-activity` — append-only activity audit trail.

pub mod log;

pub use log::ActivityLogEntry;
