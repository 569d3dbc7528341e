//! Starting an installation's executable.

use crate::LauncherError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Start `executable` as an independent child process.
///
/// The call returns as soon as the process has been created; the child is
/// never waited on from the caller's thread. Returns `true` if the process
/// started, `false` otherwise. The reason for a failure is only logged.
///
/// # Example
///
/// ```rust,no_run
/// use paradigm_launcher::launch;
/// use std::path::Path;
///
/// if !launch(Path::new(r"C:\Program Files (x86)\ETC\Paradigm 3.4.2\bin\ld.exe")) {
///     eprintln!("Could not start Paradigm");
/// }
/// ```
pub fn launch(executable: &Path) -> bool {
    tracing::info!(path = %executable.display(), "Launching");

    match spawn_detached(executable) {
        Ok(pid) => {
            tracing::info!(pid, path = %executable.display(), "Launched");
            true
        }
        Err(e) if e.is_absence() => {
            tracing::info!(error = %e, "Error launching");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "Error launching");
            false
        }
    }
}

/// Spawn with null stdio and hand the child to a reaper thread.
///
/// The reaper only collects the exit status so no zombie is left behind;
/// nothing observes it beyond a debug log line.
fn spawn_detached(executable: &Path) -> Result<u32, LauncherError> {
    if !executable.exists() {
        return Err(LauncherError::NotFound {
            path: executable.to_path_buf(),
        });
    }

    let mut child = Command::new(executable)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LauncherError::Spawn {
            path: executable.to_path_buf(),
            source,
        })?;

    let pid = child.id();
    let reaper = std::thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => tracing::debug!(pid, %status, "Launched process exited"),
            Err(e) => tracing::debug!(pid, error = %e, "Failed to wait on launched process"),
        });
    if let Err(e) = reaper {
        tracing::debug!(pid, error = %e, "Could not start reaper thread");
    }

    Ok(pid)
}
