use crate::types::{DirEntryRecord, EntryOutcome};
use chrono::{DateTime, Datelike, Local, Timelike};
use std::path::Path;

#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<DirEntryRecord>,
    pub file_count: usize,
    pub dir_count: usize,
    pub total_file_size: u64,
}

/// Keeps the listed records and totals them; skipped entries are dropped
/// without touching any count.
#[must_use]
pub fn aggregate(outcomes: Vec<EntryOutcome>) -> Listing {
    let mut listing = Listing::default();

    for outcome in outcomes {
        let record = match outcome {
            EntryOutcome::Listed(record) => record,
            EntryOutcome::Skipped(skipped) => {
                let path = skipped.path.as_deref().unwrap_or(Path::new("?"));
                log::debug!("skipped {}: {}", path.display(), skipped.reason);
                continue;
            }
        };

        if record.is_dir {
            listing.dir_count += 1;
        } else {
            listing.file_count += 1;
            listing.total_file_size += record.size;
        }
        listing.entries.push(record);
    }

    listing
}

// MM/DD/YYYY HH:MM, 24h local time, year not padded
#[must_use]
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    format!(
        "{:02}/{:02}/{} {:02}:{:02}",
        ts.month(),
        ts.day(),
        ts.year(),
        ts.hour(),
        ts.minute()
    )
}
