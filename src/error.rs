//! Error types for discovery and launch operations.
//!
//! The public operations of this crate never surface these errors: absence
//! degrades to empty results and launch failures collapse to `false`. The
//! errors exist so the internal helpers can carry path context up to the
//! single place where it is logged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while touching the filesystem or spawning processes.
///
/// Each variant carries the path involved, which is what ends up in the
/// diagnostic log line.
///
/// # Example
///
/// ```rust
/// use paradigm_launcher::LauncherError;
/// use std::path::PathBuf;
///
/// let error = LauncherError::NotFound { path: PathBuf::from("/opt/missing") };
/// assert!(error.is_absence());
/// assert_eq!(error.to_string(), "Path not found: /opt/missing");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LauncherError {
    /// The path does not exist.
    #[error("Path not found: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// A directory exists but could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// The directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The operating system refused to start the executable.
    #[error("Failed to launch {}: {source}", path.display())]
    Spawn {
        /// The executable that failed to start.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl LauncherError {
    /// Whether this error only means "nothing there".
    ///
    /// Absence is an expected condition and is logged at debug level;
    /// everything else is worth a warning.
    pub fn is_absence(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::ReadDir { source, .. } | Self::Spawn { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
        }
    }

    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::ReadDir { path, .. } | Self::Spawn { path, .. } => path,
        }
    }
}
