use crate::types::DirEntryRecord;
use std::cmp::Ordering;

/// Directories before files, then ascending raw size within each tier.
///
/// Directories are compared on their size field too, whatever the platform
/// reports for it. There is no name tie-break.
#[must_use]
pub fn compare_entries(a: &DirEntryRecord, b: &DirEntryRecord) -> Ordering {
    match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.size.cmp(&b.size),
    }
}

// Stable, so equal keys keep the scan order
pub fn sort_entries(entries: &mut [DirEntryRecord]) {
    entries.sort_by(compare_entries);
}
