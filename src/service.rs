//! The operations bound to the UI layer.

use crate::{launch, list_directory, register_custom, scan, InstallationRecord, LauncherOptions};
use std::path::{Path, PathBuf};

/// Default installation root: the program-files directory joined with the
/// vendor folder.
///
/// An unset environment variable yields the bare vendor folder as a
/// relative path.
///
/// # Example
///
/// ```rust
/// use paradigm_launcher::{default_install_root, LauncherOptions};
///
/// let opts = LauncherOptions {
///     program_files_var: "PARADIGM_LAUNCHER_UNSET_VAR".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(default_install_root(&opts), std::path::PathBuf::from("ETC"));
/// ```
pub fn default_install_root(options: &LauncherOptions) -> PathBuf {
    let program_files = std::env::var_os(&options.program_files_var).unwrap_or_default();
    let path = PathBuf::from(program_files).join(&options.vendor_folder);
    tracing::debug!(path = %path.display(), "Default installation root");
    path
}

/// Stateless facade holding the options every call is made with.
///
/// Each method corresponds to one call the UI makes:
///
/// | Method | UI call |
/// |---|---|
/// | [`add_custom`](Self::add_custom) | `AddCustomParadigm` |
/// | [`scan`](Self::scan) | `ScanForParadigmVersions` |
/// | [`default_root`](Self::default_root) | `GetDefaultParadigmPath` |
/// | [`launch`](Self::launch) | `LaunchParadigm` |
/// | [`browse`](Self::browse) | `BrowseDirectory` |
///
/// # Example
///
/// ```rust,no_run
/// use paradigm_launcher::LauncherService;
///
/// let service = LauncherService::default();
/// let records = service.scan(&service.default_root());
/// if let Some(newest) = records.iter().find(|r| r.is_launchable()) {
///     service.launch(&newest.executable_path);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LauncherService {
    options: LauncherOptions,
}

impl LauncherService {
    /// Service using `options` for every call.
    pub fn new(options: LauncherOptions) -> Self {
        Self { options }
    }

    /// The options in effect.
    pub fn options(&self) -> &LauncherOptions {
        &self.options
    }

    /// Register an executable picked by the user.
    pub fn add_custom(&self, executable: &Path) -> InstallationRecord {
        register_custom(executable, &self.options)
    }

    /// Discover installed versions under `base`.
    pub fn scan(&self, base: &Path) -> Vec<InstallationRecord> {
        scan(base, &self.options)
    }

    /// The platform-conventional installation root.
    pub fn default_root(&self) -> PathBuf {
        default_install_root(&self.options)
    }

    /// Start an executable; `true` if it started.
    pub fn launch(&self, executable: &Path) -> bool {
        launch(executable)
    }

    /// List a directory for manual selection.
    pub fn browse(&self, dir: &Path) -> Vec<String> {
        list_directory(dir)
    }
}
