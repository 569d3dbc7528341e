//! # paradigm-launcher
//!
//! Discovery and launching of locally installed Paradigm versions.
//!
//! This crate finds version-named installation directories under a root,
//! locates the executable inside each through an ordered probe grid, lets
//! users register an executable by hand, and starts the chosen one as a
//! detached process. It backs a small launcher UI but has no UI of its own.
//!
//! ## Features
//!
//! - `scan()` for discovering installations under a directory
//! - `register_custom()` for a user-chosen executable
//! - `launch()` for starting an executable without waiting on it
//! - `list_directory()` for browsing when discovery finds nothing
//! - `LauncherService` bundling these with a `LauncherOptions`
//! - `keys` for forwarding navigation keys to the UI while it has focus
//!
//! ## Example
//!
//! ```rust,no_run
//! use paradigm_launcher::{default_install_root, launch, scan, LauncherOptions};
//!
//! let options = LauncherOptions::default();
//! let records = scan(&default_install_root(&options), &options);
//!
//! for record in &records {
//!     println!("{} {}: launchable={}", record.name, record.version, record.is_launchable());
//! }
//!
//! if let Some(exe) = records.iter().find_map(|r| r.executable()) {
//!     launch(exe);
//! }
//! ```

mod browse;
mod detection;
mod error;
pub mod keys;
mod launch;
mod options;
mod record;
mod register;
mod scan;
mod service;

pub use browse::list_directory;
pub use detection::{ProbeEntry, ProbeGrid};
pub use error::LauncherError;
pub use launch::launch;
pub use options::{LauncherOptions, VersionOrdering};
pub use record::{InstallationRecord, PLACEHOLDER_NAME, VERSION_CUSTOM, VERSION_UNAVAILABLE};
pub use register::register_custom;
pub use scan::scan;
pub use service::{default_install_root, LauncherService};
