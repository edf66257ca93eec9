// tests/temp_cleanup.rs

//! Best-effort temp-dir cleanup never raises, whatever it is given.

use std::path::Path;

use joblaunch::fs::mock::MockFileSystem;
use joblaunch::fs::{FileSystem, RealFileSystem};
use joblaunch::launch::delete_temp_dir;
use joblaunch_test_utils::init_tracing;

#[test]
fn none_is_a_silent_noop() {
    delete_temp_dir(&RealFileSystem, None);
}

#[test]
fn nonexistent_dir_warns_but_does_not_panic() {
    init_tracing();

    delete_temp_dir(
        &RealFileSystem,
        Some(Path::new("/definitely/not/a/real/joblaunch/dir")),
    );
}

#[test]
fn removes_directory_recursively() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let own_tmp = dir.path().join("job_tmp_s1");
    std::fs::create_dir_all(own_tmp.join("nested")).unwrap();
    std::fs::write(own_tmp.join("nested").join("data.bin"), b"x").unwrap();

    delete_temp_dir(&RealFileSystem, Some(&own_tmp));

    assert!(!own_tmp.exists());
}

#[test]
fn safe_to_call_repeatedly() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("tmp/job_tmp_s1/data.bin");
    let dir = Path::new("tmp/job_tmp_s1");

    delete_temp_dir(&fs, Some(dir));
    assert!(!fs.exists(dir));

    // Second call only produces a warning.
    delete_temp_dir(&fs, Some(dir));
}
