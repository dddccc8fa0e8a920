//! Store error-message, atomic-write-safety, and independent-table tests.

use assert_fs::prelude::*;
use concher_core::{store, LocationKind, Registry, StoreError};
use predicates::prelude::predicate;
use std::fs;

fn sample() -> Registry {
    let mut reg = Registry::new();
    reg.define_location("docs".into(), LocationKind::Site, "https://example.com");
    reg.define_context("work".into());
    reg.add_member("work", "docs").unwrap();
    reg
}

// ---------------------------------------------------------------------------
// 1. Load errors
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    dir.child("locations.yaml")
        .write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let err = store::load_at(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("locations.yaml"), "must contain file path, got: {msg}");
}

#[test]
fn load_wrong_shape_returns_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    dir.child("contexts.yaml")
        .write_str("- this is a list, not a mapping\n")
        .expect("write");

    let err = store::load_at(dir.path()).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("contexts.yaml"));
}

#[test]
fn load_with_only_one_table_present() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    store::save_at(dir.path(), &sample()).expect("save");
    fs::remove_file(dir.child("contexts.yaml").path()).expect("rm contexts");

    let reg = store::load_at(dir.path()).expect("load");
    assert!(reg.location("docs").is_some());
    assert_eq!(reg.contexts().count(), 0);
}

#[test]
fn load_tolerates_dangling_members() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    dir.child("contexts.yaml")
        .write_str("version: 1\ncontexts:\n  - name: work\n    members: [docs, missing]\n")
        .expect("write");

    let reg = store::load_at(dir.path()).expect("load");
    let work = reg.context("work").expect("work");
    assert_eq!(work.members.len(), 2);
    assert!(reg.location("missing").is_none());
}

// ---------------------------------------------------------------------------
// 2. Save layout and atomic write safety
// ---------------------------------------------------------------------------

#[test]
fn save_writes_both_tables() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    store::save_at(dir.path(), &sample()).expect("save");

    dir.child("locations.yaml").assert(predicate::str::contains("https://example.com"));
    dir.child("contexts.yaml").assert(predicate::str::contains("work"));
    dir.child("locations.yaml.tmp").assert(predicate::path::missing());
}

#[test]
fn save_empty_registry_still_touches_files() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    store::save_at(dir.path(), &Registry::new()).expect("save");

    dir.child("locations.yaml").assert(predicate::path::exists());
    dir.child("contexts.yaml").assert(predicate::path::exists());
    assert!(store::load_at(dir.path()).expect("load").is_empty());
}

#[test]
fn stale_tmp_from_crash_does_not_affect_load() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    store::save_at(dir.path(), &sample()).expect("save");

    // Simulate crash: .tmp written but process died before rename
    dir.child("locations.yaml.tmp")
        .write_str("CRASH - INCOMPLETE WRITE")
        .expect("write crash tmp");

    let reg = store::load_at(dir.path()).expect("load");
    assert_eq!(reg, sample());

    // Next save overwrites the orphan and renames it away
    store::save_at(dir.path(), &reg).expect("save again");
    dir.child("locations.yaml.tmp").assert(predicate::path::missing());
}

#[cfg(unix)]
#[test]
fn save_into_readonly_dir_is_io_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = assert_fs::TempDir::new().expect("tempdir");
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o500)).expect("chmod");
    // root ignores directory permissions
    if fs::write(dir.path().join("probe"), b"x").is_ok() {
        return;
    }

    let err = store::save_at(dir.path(), &sample()).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }), "got: {err}");
    fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o700)).expect("restore");
}
