// tests/classpath_scan.rs

//! Classpath assembly from a directory of jar archives.

use std::path::Path;

use joblaunch::fs::mock::MockFileSystem;
use joblaunch::fs::RealFileSystem;
use joblaunch::launch::append_jar_files;

#[test]
fn matches_jar_extension_case_insensitively() {
    let fs = MockFileSystem::new();
    fs.add_file("lib/b.JAR");
    fs.add_file("lib/c.txt");
    fs.add_file("lib/a.jar");

    let mut buf = String::from("app/classes");
    append_jar_files(&fs, ":", &mut buf, Path::new("lib"), "lib/");

    assert_eq!(buf, "app/classes:lib/a.jar:lib/b.JAR");
}

#[test]
fn unlistable_dir_contributes_nothing() {
    let fs = MockFileSystem::new();

    let mut buf = String::from("app/classes");
    append_jar_files(&fs, ":", &mut buf, Path::new("no-such-dir"), "no-such-dir/");

    assert_eq!(buf, "app/classes");
}

#[test]
fn entries_are_sorted_by_file_name() {
    let fs = MockFileSystem::new();
    fs.add_file("lib/z.jar");
    fs.add_file("lib/m.jar");
    fs.add_file("lib/a.jar");

    let mut buf = String::new();
    append_jar_files(&fs, ":", &mut buf, Path::new("lib"), "");

    assert_eq!(buf, ":a.jar:m.jar:z.jar");
}

#[test]
fn scans_a_real_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("x.jar"), b"jar").unwrap();
    std::fs::write(dir.path().join("y.TXT"), b"txt").unwrap();
    std::fs::write(dir.path().join("z.Jar"), b"jar").unwrap();

    let mut buf = String::new();
    append_jar_files(&RealFileSystem, ":", &mut buf, dir.path(), "");

    assert_eq!(buf, ":x.jar:z.Jar");
}
