//! Discovery of installed versions.

use crate::detection::{log_listing_error, read_dir_sorted, VersionPattern};
use crate::{InstallationRecord, LauncherOptions, VersionOrdering};
use semver::Version;
use std::cmp::Ordering;
use std::path::Path;

/// Discover installed versions under `base`.
///
/// Immediate subdirectories of `base`, and of each configured secondary
/// root under it, are matched against the product's version pattern. Every
/// matching directory yields a record; the probe grid decides its
/// executable path, which stays empty when no candidate exists.
///
/// # Discovery Process
///
/// 1. Return an empty list if `base` does not exist
/// 2. Collect matches from `base`, then from each secondary root
/// 3. Add a placeholder record if nothing matched
/// 4. Sort descending by version using the configured ordering
///
/// Directory read failures are logged and contribute no results; the other
/// roots are still scanned.
///
/// # Example
///
/// ```rust,no_run
/// use paradigm_launcher::{scan, LauncherOptions};
/// use std::path::Path;
///
/// let records = scan(Path::new(r"C:\Program Files (x86)\ETC"), &LauncherOptions::default());
/// for record in records.iter().filter(|r| r.is_launchable()) {
///     println!("{} {} at {:?}", record.name, record.version, record.executable_path);
/// }
/// ```
pub fn scan(base: &Path, options: &LauncherOptions) -> Vec<InstallationRecord> {
    tracing::info!(base = %base.display(), "Scanning for installed versions");

    if !base.exists() {
        tracing::info!(base = %base.display(), "Base directory does not exist");
        return Vec::new();
    }

    let pattern = VersionPattern::for_product(&options.product_name);
    let mut records = Vec::new();

    collect_installations(base, &pattern, options, &mut records);

    for subdir in &options.secondary_roots {
        let root = base.join(subdir);
        if root.is_dir() {
            collect_installations(&root, &pattern, options, &mut records);
        }
    }

    if records.is_empty() {
        records.push(InstallationRecord::placeholder(base));
    }

    sort_records(&mut records, options.ordering);

    tracing::info!(count = records.len(), "Returning installation records");
    records
}

/// Append a record for every version directory directly under `root`.
fn collect_installations(
    root: &Path,
    pattern: &VersionPattern,
    options: &LauncherOptions,
    records: &mut Vec<InstallationRecord>,
) {
    let entries = match read_dir_sorted(root) {
        Ok(entries) => entries,
        Err(e) => {
            log_listing_error(&e);
            return;
        }
    };

    tracing::debug!(root = %root.display(), items = entries.len(), "Listing scan root");

    for entry in entries {
        let install_path = entry.path();
        if !install_path.is_dir() {
            continue;
        }

        let dir_name = entry.file_name();
        let dir_name = dir_name.to_string_lossy();
        let Some(found) = pattern.find(&dir_name) else {
            continue;
        };

        let executable = options.probe_grid.find_executable(&install_path);
        match &executable {
            Some(exe) => tracing::info!(
                version = found.version,
                executable = %exe.display(),
                "Found version with executable"
            ),
            None => tracing::info!(
                version = found.version,
                dir = %install_path.display(),
                "Found version but no executable"
            ),
        }

        records.push(InstallationRecord::discovered(
            &options.product_name,
            found.version,
            install_path,
            executable,
        ));
    }
}

/// Sort records newest first. The sort is stable, so ties keep scan order.
pub(crate) fn sort_records(records: &mut [InstallationRecord], ordering: VersionOrdering) {
    match ordering {
        VersionOrdering::Lexicographic => records.sort_by(|a, b| b.version.cmp(&a.version)),
        VersionOrdering::Numeric => records.sort_by(|a, b| compare_numeric(&b.version, &a.version)),
    }
}

/// Semantic comparison where any parsed version outranks an unparseable one.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (Version::parse(a).ok(), Version::parse(b).ok()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
