//! Launcher configuration.
//!
//! This module provides the [`LauncherOptions`] struct describing what is
//! searched for and where, and the [`VersionOrdering`] policy for sorting
//! discovery results.

use crate::ProbeGrid;
use serde::{Deserialize, Serialize};

/// How discovery results are ordered. Both orderings are descending.
///
/// `Lexicographic` compares version strings byte by byte, so `"3.4.2"`
/// sorts before `"10.0.0"`. It is the default because the UI has always
/// presented versions that way. `Numeric` compares parsed semantic versions
/// and puts anything unparseable last.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VersionOrdering {
    /// Byte-wise string comparison.
    #[default]
    Lexicographic,
    /// Semantic version comparison.
    Numeric,
}

/// Configuration for discovery, registration and the default root.
///
/// # Default Behavior
///
/// Searches for `Paradigm` directories under the base and under its
/// `Software`, `Programs` and `Applications` subdirectories, probing the
/// default [`ProbeGrid`]. The default root is `%ProgramFiles(x86)%\ETC`.
///
/// # Example
///
/// ```rust
/// use paradigm_launcher::{LauncherOptions, VersionOrdering};
///
/// // Defaults
/// let opts = LauncherOptions::default();
/// assert_eq!(opts.product_name, "Paradigm");
///
/// // Sort by semantic version instead
/// let opts = LauncherOptions {
///     ordering: VersionOrdering::Numeric,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherOptions {
    /// Literal product name that version directories start with.
    ///
    /// Default: `"Paradigm"`
    pub product_name: String,

    /// Well-known subdirectories of the base that are scanned as well.
    ///
    /// Default: `["Software", "Programs", "Applications"]`
    pub secondary_roots: Vec<String>,

    /// Where to look for the executable inside a version directory.
    pub probe_grid: ProbeGrid,

    /// Result ordering.
    ///
    /// Default: [`VersionOrdering::Lexicographic`]
    pub ordering: VersionOrdering,

    /// Environment variable naming the program-files directory.
    ///
    /// Default: `"ProgramFiles(x86)"`
    pub program_files_var: String,

    /// Vendor folder under the program-files directory.
    ///
    /// Default: `"ETC"`
    pub vendor_folder: String,
}

impl Default for LauncherOptions {
    fn default() -> Self {
        Self {
            product_name: "Paradigm".to_string(),
            secondary_roots: vec![
                "Software".to_string(),
                "Programs".to_string(),
                "Applications".to_string(),
            ],
            probe_grid: ProbeGrid::default(),
            ordering: VersionOrdering::default(),
            program_files_var: "ProgramFiles(x86)".to_string(),
            vendor_folder: "ETC".to_string(),
        }
    }
}
