//! Manual registration of an executable chosen by the user.

use crate::detection::VersionPattern;
use crate::record::VERSION_CUSTOM;
use crate::{InstallationRecord, LauncherOptions};
use std::path::{Path, PathBuf};

/// Build a record for an executable the user picked by hand.
///
/// The version is inferred from the parent directory name: first with the
/// product pattern (`Paradigm_v3.4.2`), then with any bare version
/// (`MyTool_v2.1.0`), then with the product pattern on the nearest
/// ancestor (`Paradigm_v3.4.2/bin`). When none matches, the version is
/// `"Custom"` and the name is derived from the file name (`app_test.exe`
/// becomes `App Test`).
///
/// Returns [`InstallationRecord::default()`] when `executable` does not
/// exist; check with [`InstallationRecord::is_empty`].
///
/// # Example
///
/// ```rust,no_run
/// use paradigm_launcher::{register_custom, LauncherOptions};
/// use std::path::Path;
///
/// let record = register_custom(Path::new(r"D:\Tools\MyTool_v2.1.0\app.exe"), &LauncherOptions::default());
/// if !record.is_empty() {
///     println!("{} {}", record.name, record.version);
/// }
/// ```
pub fn register_custom(executable: &Path, options: &LauncherOptions) -> InstallationRecord {
    tracing::info!(path = %executable.display(), "Adding custom executable");

    if !executable.exists() {
        tracing::info!(path = %executable.display(), "Custom executable does not exist");
        return InstallationRecord::default();
    }

    let install_path = match executable.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let folder = install_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let product = VersionPattern::for_product(&options.product_name);
    let (name, version) = if let Some(found) = product.find(&folder) {
        (options.product_name.clone(), found.version.to_string())
    } else if let Some(found) = VersionPattern::any_product().find(&folder) {
        let prefix = found
            .prefix
            .trim_matches(|c: char| c == '_' || c == '-' || c.is_whitespace());
        let name = if prefix.is_empty() {
            options.product_name.clone()
        } else {
            prefix.to_string()
        };
        (name, found.version.to_string())
    } else if let Some(version) = ancestor_version(&install_path, &product) {
        (options.product_name.clone(), version)
    } else {
        let name = display_name_from_file(executable)
            .unwrap_or_else(|| format!("Custom {}", options.product_name));
        (name, VERSION_CUSTOM.to_string())
    };

    InstallationRecord {
        name,
        version,
        install_path,
        executable_path: executable.to_path_buf(),
    }
}

/// Version of the nearest ancestor of `install_path` named like a product
/// directory, e.g. `Paradigm_v3.4.2` for `Paradigm_v3.4.2/bin`.
fn ancestor_version(install_path: &Path, product: &VersionPattern) -> Option<String> {
    install_path.ancestors().skip(1).find_map(|dir| {
        let name = dir.file_name()?.to_string_lossy();
        product.find(&name).map(|found| found.version.to_string())
    })
}

/// File stem with underscores as spaces, title-cased.
fn display_name_from_file(executable: &Path) -> Option<String> {
    let stem = executable.file_stem()?.to_string_lossy().replace('_', " ");
    let name = title_case(stem.trim());
    (!name.is_empty()).then_some(name)
}

/// Upper-case the first letter of every word and lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}
