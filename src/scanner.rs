use crate::error::ListError;
use crate::types::{DirEntryRecord, EntryOutcome, SkippedEntry};
use chrono::{DateTime, Local};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Looks at every immediate child of `path`, in file-name order.
///
/// Fails only when the folder itself cannot be listed; a child whose
/// metadata cannot be read comes back as [`EntryOutcome::Skipped`].
pub fn scan_dir(path: &Path) -> Result<Vec<EntryOutcome>, ListError> {
    // Missing, unreadable and non-directory roots all fail here with the OS error
    let _ = fs::read_dir(path).map_err(|source| ListError::PathAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut outcomes = Vec::new();

    for item in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        match item {
            Ok(entry) => outcomes.push(stat_child(entry.path(), entry.file_name())),
            // The folder exists but reading it failed (permissions, removed mid-walk)
            Err(err) if err.path() == Some(path) => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(ListError::PathAccess {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                outcomes.push(EntryOutcome::Skipped(SkippedEntry {
                    path: err.path().map(Path::to_path_buf),
                    reason: err.to_string(),
                }));
            }
        }
    }

    Ok(outcomes)
}

fn stat_child(path: &Path, name: &OsStr) -> EntryOutcome {
    match read_record(path, name) {
        Ok(record) => EntryOutcome::Listed(record),
        Err(err) => EntryOutcome::Skipped(SkippedEntry {
            path: Some(path.to_path_buf()),
            reason: err.to_string(),
        }),
    }
}

// Follows symlinks, so a dangling link fails here and is skipped
fn read_record(path: &Path, name: &OsStr) -> io::Result<DirEntryRecord> {
    let metadata = fs::metadata(path)?;
    let modified: DateTime<Local> = metadata.modified()?.into();

    Ok(DirEntryRecord {
        name: name.to_string_lossy().to_string(),
        is_dir: metadata.is_dir(),
        size: metadata.len(),
        modified,
    })
}
