use chrono::{DateTime, Local};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DirEntryRecord {
    pub name: String,
    pub is_dir: bool,
    // Raw metadata length; only displayed for files
    pub size: u64,
    pub modified: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct SkippedEntry {
    pub path: Option<PathBuf>,
    pub reason: String,
}

/// Result of looking at one child of the listed folder.
#[derive(Debug, Clone)]
pub enum EntryOutcome {
    Listed(DirEntryRecord),
    Skipped(SkippedEntry),
}
