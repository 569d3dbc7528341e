//! Sorted single-level directory listing.

use crate::LauncherError;
use std::fs::{self, DirEntry};
use std::path::Path;

/// Immediate children of `dir`, ordered by file name.
///
/// Entries that fail to read individually are skipped.
pub(crate) fn read_dir_sorted(dir: &Path) -> Result<Vec<DirEntry>, LauncherError> {
    if !dir.exists() {
        return Err(LauncherError::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut entries: Vec<DirEntry> = fs::read_dir(dir)
        .map_err(|source| LauncherError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(Result::ok)
        .collect();
    entries.sort_by_key(DirEntry::file_name);

    Ok(entries)
}

/// Log a listing failure at a level matching its severity.
pub(crate) fn log_listing_error(error: &LauncherError) {
    if error.is_absence() {
        tracing::debug!(path = %error.path().display(), "Directory does not exist");
    } else {
        tracing::warn!(error = %error, "Error reading directory");
    }
}
