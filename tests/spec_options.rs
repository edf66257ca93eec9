// tests/spec_options.rs

//! Launch spec builder behaviour: option ordering, remote debug, GC logging.

use std::path::MAIN_SEPARATOR;

use joblaunch::fs::mock::FixedPaths;
use joblaunch::launch::LaunchSpec;

const DEBUG_FLAGS: [&str; 2] = [
    "-Xdebug",
    "-Xrunjdwp:transport=dt_socket,server=y,suspend=y,address=localhost:8000",
];

#[test]
fn options_preserve_call_order() {
    let spec = LaunchSpec::new("crawler")
        .add_options(["-Xms256m"])
        .remote_debug()
        .add_options(["-Xmx512m", "-Dfoo=1"]);

    assert_eq!(
        spec.options(),
        [
            "-Xms256m",
            DEBUG_FLAGS[0],
            DEBUG_FLAGS[1],
            "-Xmx512m",
            "-Dfoo=1",
        ]
    );
}

#[test]
fn remote_debug_twice_appends_four_entries() {
    let spec = LaunchSpec::new("crawler").remote_debug().remote_debug();

    assert_eq!(
        spec.options(),
        [DEBUG_FLAGS[0], DEBUG_FLAGS[1], DEBUG_FLAGS[0], DEBUG_FLAGS[1]]
    );
}

#[test]
fn gc_logging_uses_explicit_log_path() {
    let paths = FixedPaths::new("/default/logs");
    let spec = LaunchSpec::new("crawler")
        .log_file_path("/var/log/x")
        .gc_logging(&paths);

    let expected = format!(
        "-Xlog:gc*,gc+age=trace,safepoint:file=/var/log/x{MAIN_SEPARATOR}gc-crawler.log:utctime,pid,tags:filecount=32,filesize=64m"
    );
    assert_eq!(spec.options().len(), 1);
    assert_eq!(spec.options()[0], expected);
}

#[test]
fn gc_logging_falls_back_to_system_default() {
    let paths = FixedPaths::new("/default/logs");
    let spec = LaunchSpec::new("thumbnail").gc_logging(&paths);

    let expected = format!(
        "-Xlog:gc*,gc+age=trace,safepoint:file=/default/logs{MAIN_SEPARATOR}gc-thumbnail.log:utctime,pid,tags:filecount=32,filesize=64m"
    );
    assert_eq!(spec.options().len(), 1);
    assert_eq!(spec.options()[0], expected);
}

#[test]
fn gc_logging_appends_after_existing_options() {
    let paths = FixedPaths::new("/default/logs");
    let spec = LaunchSpec::new("crawler")
        .add_options(["-Xmx512m"])
        .gc_logging(&paths);

    assert_eq!(spec.options().len(), 2);
    assert_eq!(spec.options()[0], "-Xmx512m");
    assert!(spec.options()[1].starts_with("-Xlog:gc*"));
}
