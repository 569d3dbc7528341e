//! Integration tests for discovery, registration, launching and browsing.
//!
//! Every test builds its own directory tree under a temporary directory.

use paradigm_launcher::{
    launch, list_directory, register_custom, scan, InstallationRecord, LauncherOptions,
    ProbeEntry, ProbeGrid, VersionOrdering, VERSION_CUSTOM, VERSION_UNAVAILABLE,
};
use std::fs;
use std::path::{Path, MAIN_SEPARATOR};
use std::time::{Duration, Instant};

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn versions(records: &[InstallationRecord]) -> Vec<&str> {
    records.iter().map(|r| r.version.as_str()).collect()
}

#[test]
fn test_scan_nonexistent_base_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let records = scan(&dir.path().join("missing"), &LauncherOptions::default());
    assert!(records.is_empty());
}

#[test]
fn test_scan_without_matches_returns_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("Unrelated 1.0.0")).unwrap();
    fs::create_dir(dir.path().join("Paradigm")).unwrap();

    let records = scan(dir.path(), &LauncherOptions::default());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].version, VERSION_UNAVAILABLE);
    assert!(records[0].executable_path.as_os_str().is_empty());
    assert_eq!(records[0].install_path, dir.path());
}

#[test]
fn test_scan_finds_bin_executable() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("Paradigm_v3.4.2/bin/light_designer.exe"));

    let records = scan(dir.path(), &LauncherOptions::default());

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Paradigm");
    assert_eq!(record.version, "3.4.2");
    assert_eq!(record.install_path, dir.path().join("Paradigm_v3.4.2"));
    assert!(record
        .executable_path
        .ends_with(Path::new("bin").join("light_designer.exe")));
    assert!(record.is_launchable());
}

#[test]
fn test_scan_reports_version_without_executable() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Paradigm 3.4.2/docs")).unwrap();
    touch(&dir.path().join("Paradigm 3.4.2/readme.txt"));

    let records = scan(dir.path(), &LauncherOptions::default());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].version, "3.4.2");
    assert!(records[0].executable_path.as_os_str().is_empty());
    assert!(!records[0].is_launchable());
    assert!(!records[0].is_placeholder());
}

#[test]
fn test_scan_orders_versions_bytewise() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("Paradigm 10.0.0/ld.exe"));
    touch(&dir.path().join("Paradigm 3.4.2/ld.exe"));

    let records = scan(dir.path(), &LauncherOptions::default());

    // Byte-wise: "3" > "1", so 3.4.2 comes first even though 10.0.0 is newer.
    assert_eq!(versions(&records), ["3.4.2", "10.0.0"]);
}

#[test]
fn test_scan_numeric_ordering_option() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("Paradigm 10.0.0/ld.exe"));
    touch(&dir.path().join("Paradigm 3.4.2/ld.exe"));

    let options = LauncherOptions {
        ordering: VersionOrdering::Numeric,
        ..Default::default()
    };
    let records = scan(dir.path(), &options);

    assert_eq!(versions(&records), ["10.0.0", "3.4.2"]);
}

#[test]
fn test_scan_includes_secondary_roots() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("Paradigm 1.0.0/ld.exe"));
    touch(&dir.path().join("Software/Paradigm 2.0.0/app/paradigm.exe"));
    touch(&dir.path().join("Programs/Paradigm v3.0.0/LightDesigner.exe"));
    touch(&dir.path().join("Elsewhere/Paradigm 4.0.0/ld.exe"));

    let records = scan(dir.path(), &LauncherOptions::default());

    assert_eq!(versions(&records), ["3.0.0", "2.0.0", "1.0.0"]);
    assert!(records.iter().all(|r| r.is_launchable()));
    assert!(records[1]
        .executable_path
        .ends_with(Path::new("app").join("paradigm.exe")));
}

#[test]
fn test_scan_probe_priority() {
    let dir = tempfile::tempdir().unwrap();
    let install = dir.path().join("Paradigm 3.4.2");
    touch(&install.join("paradigm.exe"));
    touch(&install.join("bin/ld.exe"));
    touch(&install.join("Light Designer/lightdesigner.exe"));

    let records = scan(dir.path(), &LauncherOptions::default());

    assert_eq!(
        records[0].executable_path,
        install.join("Light Designer").join("lightdesigner.exe")
    );
}

#[test]
fn test_scan_custom_probe_grid() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("Paradigm 3.4.2/ld.exe"));
    touch(&dir.path().join("Paradigm 3.4.2/tools/launch"));

    let options = LauncherOptions {
        probe_grid: ProbeGrid::new(vec![ProbeEntry::new("tools", "launch")]),
        ..Default::default()
    };
    let records = scan(dir.path(), &options);

    assert!(records[0]
        .executable_path
        .ends_with(Path::new("tools").join("launch")));
}

#[cfg(unix)]
#[test]
fn test_scan_unreadable_root_keeps_other_results() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("Paradigm 1.0.0/ld.exe"));
    let locked = dir.path().join("Programs");
    touch(&locked.join("Paradigm 2.0.0/ld.exe"));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything; only assert when the lock is effective.
    let locked_effective = fs::read_dir(&locked).is_err();
    let records = scan(dir.path(), &LauncherOptions::default());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if locked_effective {
        assert_eq!(versions(&records), ["1.0.0"]);
    }
}

#[test]
fn test_register_missing_path_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let record = register_custom(&dir.path().join("nope.exe"), &LauncherOptions::default());

    assert!(record.is_empty());
    assert!(record.name.is_empty());
    assert!(record.version.is_empty());
    assert!(record.install_path.as_os_str().is_empty());
    assert!(record.executable_path.as_os_str().is_empty());
}

#[test]
fn test_register_versioned_folder() {
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("MyTool_v2.1.0/app.exe");
    touch(&exe);

    let record = register_custom(&exe, &LauncherOptions::default());

    assert_eq!(record.version, "2.1.0");
    assert_eq!(record.name, "MyTool");
    assert_eq!(record.install_path, dir.path().join("MyTool_v2.1.0"));
    assert_eq!(record.executable_path, exe);
}

#[test]
fn test_register_unversioned_folder() {
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("RandomFolder/app_test.exe");
    touch(&exe);

    let record = register_custom(&exe, &LauncherOptions::default());

    assert_eq!(record.version, VERSION_CUSTOM);
    assert_eq!(record.name, "App Test");
    assert_eq!(record.install_path, dir.path().join("RandomFolder"));
    assert_eq!(record.executable_path, exe);
}

#[test]
fn test_launch_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!launch(&dir.path().join("ld.exe")));
}

#[cfg(unix)]
#[test]
fn test_launch_does_not_block() {
    let sleep = Path::new("/bin/sleep");
    if !sleep.exists() {
        return;
    }

    // A script that outlives the call by far; launch must return first.
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("slow.sh");
    fs::write(&script, "#!/bin/sh\nexec /bin/sleep 5\n").unwrap();
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    }

    let started = Instant::now();
    assert!(launch(&script));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn test_list_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_directory(dir.path()).is_empty());
}

#[test]
fn test_list_marks_directories() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("ld.exe"));
    fs::create_dir(dir.path().join("bin")).unwrap();

    let entries = list_directory(dir.path());

    assert_eq!(entries.len(), 2);
    let bin = format!("{}{}", dir.path().join("bin").display(), MAIN_SEPARATOR);
    let exe = dir.path().join("ld.exe").display().to_string();
    assert_eq!(entries, [bin, exe]);
}
