use crate::error::ListError;
use crate::resolver;
use crate::scanner;
use crate::sorter;
use crate::stats::{self, Listing};
use std::path::Path;

/// Runs resolve, scan, aggregate and sort for one folder.
///
/// All state lives in the returned [`Listing`], so repeated calls never
/// share counts.
pub fn list_dir(folder: &Path) -> Result<Listing, ListError> {
    let path = resolver::normalize(folder);
    log::debug!("listing {}", path.display());

    let outcomes = scanner::scan_dir(&path)?;
    let mut listing = stats::aggregate(outcomes);
    sorter::sort_entries(&mut listing.entries);

    log::debug!(
        "{} files, {} dirs, {} bytes",
        listing.file_count,
        listing.dir_count,
        listing.total_file_size
    );
    Ok(listing)
}
