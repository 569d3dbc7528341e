//! Detection implementation submodule.
//!
//! Internal building blocks shared by discovery, registration and browsing:
//!
//! - `VersionPattern`: regex matching of version-named directories
//! - `ProbeGrid`: ordered candidate locations for the executable
//! - `read_dir_sorted`: deterministic single-level directory listing

mod listing;
mod pattern;
mod probe;

pub(crate) use listing::{log_listing_error, read_dir_sorted};
pub(crate) use pattern::VersionPattern;
pub use probe::{ProbeEntry, ProbeGrid};
