//! The probe grid: where to look for a runnable binary inside a version
//! directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Subdirectories tried by the default grid, in priority order. The empty
/// entry is the version directory itself.
const DEFAULT_SUBDIRS: &[&str] = &["LightDesigner", "Light Designer", "bin", "app", ""];

/// Executable names tried by the default grid, in priority order.
const DEFAULT_FILE_NAMES: &[&str] = &[
    "light_designer.exe",
    "lightdesigner.exe",
    "LightDesigner.exe",
    "ld.exe",
    "paradigm.exe",
];

/// One candidate location, relative to a version directory.
///
/// # Example
///
/// ```rust
/// use paradigm_launcher::ProbeEntry;
/// use std::path::Path;
///
/// let entry = ProbeEntry::new("bin", "ld.exe");
/// assert_eq!(entry.resolve(Path::new("/opt/Paradigm 3.4.2")), Path::new("/opt/Paradigm 3.4.2/bin/ld.exe"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeEntry {
    /// Subdirectory under the version directory; empty for the directory
    /// itself.
    pub subdir: String,

    /// Executable file name.
    pub file_name: String,
}

impl ProbeEntry {
    /// Create an entry.
    pub fn new(subdir: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            subdir: subdir.into(),
            file_name: file_name.into(),
        }
    }

    /// Full candidate path under `install_dir`.
    pub fn resolve(&self, install_dir: &Path) -> PathBuf {
        if self.subdir.is_empty() {
            install_dir.join(&self.file_name)
        } else {
            install_dir.join(&self.subdir).join(&self.file_name)
        }
    }
}

/// Ordered table of probe entries. The first entry whose path is an
/// existing file wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbeGrid {
    entries: Vec<ProbeEntry>,
}

impl ProbeGrid {
    /// Grid from an explicit, already ordered list of entries.
    pub fn new(entries: Vec<ProbeEntry>) -> Self {
        Self { entries }
    }

    /// Every subdirectory combined with every file name, subdirectory-major.
    pub fn cartesian<S, F>(subdirs: &[S], file_names: &[F]) -> Self
    where
        S: AsRef<str>,
        F: AsRef<str>,
    {
        let entries = subdirs
            .iter()
            .flat_map(|dir| {
                let dir: &str = dir.as_ref();
                file_names.iter().map(move |name| {
                    let name: &str = name.as_ref();
                    ProbeEntry::new(dir, name)
                })
            })
            .collect();
        Self { entries }
    }

    /// The entries in priority order.
    pub fn entries(&self) -> &[ProbeEntry] {
        &self.entries
    }

    /// Candidate paths under `install_dir` in priority order.
    pub fn candidates<'a>(&'a self, install_dir: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.entries.iter().map(move |entry| entry.resolve(install_dir))
    }

    /// First candidate that exists as a file.
    pub fn find_executable(&self, install_dir: &Path) -> Option<PathBuf> {
        self.candidates(install_dir).find(|path| {
            tracing::trace!(path = %path.display(), "Checking for executable");
            path.is_file()
        })
    }
}

impl Default for ProbeGrid {
    fn default() -> Self {
        Self::cartesian(DEFAULT_SUBDIRS, DEFAULT_FILE_NAMES)
    }
}
