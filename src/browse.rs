//! Directory listing for manual selection.

use crate::detection::{log_listing_error, read_dir_sorted};
use std::path::{Path, MAIN_SEPARATOR};

/// List the immediate children of `dir` as path strings.
///
/// Directories end with the platform path separator so the UI can tell
/// them apart from files. Entries are ordered by file name. Entries whose
/// path is not valid UTF-8 are skipped, so every returned string can be
/// passed back to [`register_custom`](crate::register_custom) or
/// [`launch`](crate::launch). A missing or unreadable directory yields an
/// empty list.
///
/// # Example
///
/// ```rust,no_run
/// use paradigm_launcher::list_directory;
/// use std::path::Path;
///
/// for entry in list_directory(Path::new(r"C:\Program Files (x86)\ETC")) {
///     println!("{entry}");
/// }
/// ```
pub fn list_directory(dir: &Path) -> Vec<String> {
    tracing::debug!(dir = %dir.display(), "Browsing directory");

    let entries = match read_dir_sorted(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log_listing_error(&e);
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let path = entry.path();
            let Some(text) = path.to_str() else {
                tracing::debug!(path = %path.display(), "Skipping entry with non-UTF-8 name");
                return None;
            };
            let mut item = text.to_string();
            if path.is_dir() {
                item.push(MAIN_SEPARATOR);
            }
            Some(item)
        })
        .collect()
}
