//! Installation records produced by discovery and manual registration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version sentinel for a manually registered executable whose version
/// could not be inferred.
pub const VERSION_CUSTOM: &str = "Custom";

/// Version sentinel carried by the placeholder record.
pub const VERSION_UNAVAILABLE: &str = "N/A";

/// Display name of the placeholder record.
pub const PLACEHOLDER_NAME: &str = "No versions found";

/// One discovered or manually registered copy of the application.
///
/// Records are built fresh on every call and owned by the caller. An empty
/// `executable_path` means no runnable binary was found; such records are
/// informational and [`is_launchable`](Self::is_launchable) returns `false`
/// for them.
///
/// The serialized form uses the keys `name`, `version`, `path` and
/// `executablePath`, which is what the UI layer consumes.
///
/// # Example
///
/// ```rust
/// use paradigm_launcher::InstallationRecord;
///
/// let record = InstallationRecord::default();
/// assert!(record.is_empty());
/// assert!(!record.is_launchable());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationRecord {
    /// Display label.
    pub name: String,

    /// `MAJOR.MINOR.PATCH`, or one of [`VERSION_CUSTOM`] / [`VERSION_UNAVAILABLE`].
    pub version: String,

    /// Directory believed to contain the installation.
    #[serde(rename = "path")]
    pub install_path: PathBuf,

    /// Full path to the runnable binary, empty when none was found.
    ///
    /// Existence was checked when the record was built; the file may have
    /// disappeared since.
    pub executable_path: PathBuf,
}

impl InstallationRecord {
    /// Record for a version directory found by discovery.
    pub(crate) fn discovered(
        name: &str,
        version: &str,
        install_path: PathBuf,
        executable_path: Option<PathBuf>,
    ) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            install_path,
            executable_path: executable_path.unwrap_or_default(),
        }
    }

    /// The synthetic "nothing found" record pointing at `base`.
    pub(crate) fn placeholder(base: &Path) -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            version: VERSION_UNAVAILABLE.to_string(),
            install_path: base.to_path_buf(),
            executable_path: PathBuf::new(),
        }
    }

    /// Whether this record can be offered as a launch target.
    pub fn is_launchable(&self) -> bool {
        !self.executable_path.as_os_str().is_empty()
    }

    /// Whether this is the zero-value record returned by a failed
    /// registration.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether this is the placeholder returned when discovery found nothing.
    pub fn is_placeholder(&self) -> bool {
        self.version == VERSION_UNAVAILABLE && !self.is_launchable()
    }

    /// The executable path, if any.
    pub fn executable(&self) -> Option<&Path> {
        self.is_launchable().then_some(self.executable_path.as_path())
    }
}
