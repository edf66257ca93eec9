// tests/config_loading.rs

//! Config loading and validation.

use joblaunch::config::load_and_validate;
use joblaunch::errors::LaunchError;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("Joblaunch.toml");
    std::fs::write(&path, contents).expect("write config file");
    (dir, path)
}

#[test]
fn loads_a_full_config() {
    let (_dir, path) = write_config(
        r#"
[paths]
java_command = "/usr/bin/java"
app_home = "/opt/app"

[runtime]
options = ["-Xmx1g"]

[job.crawler]
main_class = "org.example.search.exec.Crawler"
options = ["-Dcrawler.threads=2"]
args = ["--verbose"]
"#,
    );

    let cfg = load_and_validate(&path).expect("load config");

    assert_eq!(cfg.paths.java_command, "/usr/bin/java");
    assert_eq!(cfg.paths.app_home, std::path::PathBuf::from("/opt/app"));
    // Defaults fill the rest of [paths] and [engine].
    assert_eq!(cfg.paths.log_dir, std::path::PathBuf::from("logs"));
    assert_eq!(cfg.paths.lib_dir, std::path::PathBuf::from("lib"));
    assert_eq!(cfg.engine.url, "http://localhost:9201");
    assert_eq!(cfg.runtime.options, vec!["-Xmx1g"]);

    let crawler = cfg.job_section("crawler").expect("crawler section");
    assert_eq!(crawler.main_class, "org.example.search.exec.Crawler");
    assert_eq!(crawler.options, vec!["-Dcrawler.threads=2"]);
    assert_eq!(crawler.args, vec!["--verbose"]);
}

#[test]
fn rejects_a_config_without_jobs() {
    let (_dir, path) = write_config("[paths]\njava_command = \"java\"\n");

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, LaunchError::ConfigError(_)));
    assert!(err.to_string().contains("at least one [job.<kind>]"));
}

#[test]
fn rejects_an_unknown_job_kind() {
    let (_dir, path) = write_config(
        r#"
[job.indexer]
main_class = "org.example.search.exec.Indexer"
"#,
    );

    let err = load_and_validate(&path).unwrap_err();
    assert!(err.to_string().contains("unknown job kind 'indexer'"));
}

#[test]
fn rejects_an_empty_main_class() {
    let (_dir, path) = write_config(
        r#"
[job.crawler]
main_class = "  "
"#,
    );

    let err = load_and_validate(&path).unwrap_err();
    assert!(err.to_string().contains("main_class must not be empty"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_and_validate("/no/such/Joblaunch.toml").unwrap_err();
    assert!(matches!(err, LaunchError::IoError(_)));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[job.crawler\nmain_class = ");

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, LaunchError::TomlError(_)));
}
