// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [paths]
/// java_command = "java"
/// app_home = "/opt/searchapp"
/// log_dir = "/var/log/searchapp"
/// lib_dir = "/opt/searchapp/lib"
///
/// [engine]
/// url = "http://localhost:9201"
///
/// [runtime]
/// options = ["-Xmx512m"]
///
/// [job.crawler]
/// main_class = "org.example.search.exec.Crawler"
/// options = ["-Dcrawler.threads=8"]
/// ```
///
/// All sections except `[job.<kind>]` are optional and have reasonable
/// defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Interpreter and directory layout from `[paths]`.
    #[serde(default)]
    pub paths: PathsSection,

    /// Remote search engine settings from `[engine]`.
    #[serde(default)]
    pub engine: EngineSection,

    /// Baseline JVM flags shared by all jobs, from `[runtime]`.
    #[serde(default)]
    pub runtime: RuntimeSection,

    /// All jobs from `[job.<kind>]`.
    ///
    /// Keys are the *execute type* tokens (e.g. `"crawler"`).
    #[serde(default)]
    pub job: BTreeMap<String, JobSection>,
}

/// Validated configuration; see `validate.rs` for the checks applied when
/// converting from [`RawConfigFile`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub paths: PathsSection,
    pub engine: EngineSection,
    pub runtime: RuntimeSection,
    pub job: BTreeMap<String, JobSection>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        paths: PathsSection,
        engine: EngineSection,
        runtime: RuntimeSection,
        job: BTreeMap<String, JobSection>,
    ) -> Self {
        Self {
            paths,
            engine,
            runtime,
            job,
        }
    }

    /// Look up the `[job.<kind>]` section for an execute type token.
    pub fn job_section(&self, execute_type: &str) -> Option<&JobSection> {
        self.job.get(execute_type)
    }
}

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsSection {
    /// Interpreter used to start child processes.
    #[serde(default = "default_java_command")]
    pub java_command: String,

    /// Application home; `<app_home>/classes` leads the classpath.
    #[serde(default = "default_app_home")]
    pub app_home: PathBuf,

    /// Default directory for child log output.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Directory scanned for `.jar` archives.
    #[serde(default = "default_lib_dir")]
    pub lib_dir: PathBuf,
}

fn default_java_command() -> String {
    "java".to_string()
}

fn default_app_home() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_lib_dir() -> PathBuf {
    PathBuf::from("lib")
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            java_command: default_java_command(),
            app_home: default_app_home(),
            log_dir: default_log_dir(),
            lib_dir: default_lib_dir(),
        }
    }
}

/// `[engine]` section.
///
/// Used only when a launch opts out of a colocated local engine.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSection {
    #[serde(default = "default_engine_url")]
    pub url: String,
}

fn default_engine_url() -> String {
    "http://localhost:9201".to_string()
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            url: default_engine_url(),
        }
    }
}

/// `[runtime]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RuntimeSection {
    /// Baseline JVM flags prepended for every job, before the per-job
    /// `[job.<kind>].options`.
    #[serde(default)]
    pub options: Vec<String>,
}

/// `[job.<kind>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSection {
    /// Entry point class handed to the interpreter.
    pub main_class: String,

    /// Fixed per-kind baseline flags.
    #[serde(default)]
    pub options: Vec<String>,

    /// Extra trailing arguments appended after `--session-id`.
    #[serde(default)]
    pub args: Vec<String>,
}
