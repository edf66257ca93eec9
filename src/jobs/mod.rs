// src/jobs/mod.rs

//! Concrete job kinds and the trait the launcher depends on.
//!
//! Each job kind owns its fixed baseline flags, its property whitelist and
//! its trailing arguments; the shared core only guarantees the helper
//! primitives and the ordering contract (see [`crate::launch::assemble`]).

pub mod crawler;
pub mod thumbnail;

pub use crawler::CrawlerJob;
pub use thumbnail::ThumbnailJob;

use std::future::Future;
use std::path::MAIN_SEPARATOR;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::fs::{FileSystem, SystemPaths};
use crate::launch::{append_jar_files, AssembledCommand, LaunchSpec, PropertySource};

/// Classpath separator of the platform we launch on.
const CP_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// One launchable job kind.
pub trait ExecJob: Send {
    /// Stable, filesystem-safe token identifying the job kind.
    fn execute_type(&self) -> &'static str;

    /// Pure command assembly; does not spawn anything.
    ///
    /// Also used by `--dry-run` to show the command that would run.
    fn assemble(&self) -> Result<AssembledCommand>;

    /// Assemble and hand the command to the configured executor.
    ///
    /// Resolves to the session token for this run.
    fn execute(&mut self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>>;
}

/// Shared read-only collaborators handed to every job.
#[derive(Debug, Clone)]
pub struct LaunchContext {
    pub config: ConfigFile,
    pub fs: Arc<dyn FileSystem>,
    pub paths: Arc<dyn SystemPaths>,
    pub props: Arc<dyn PropertySource>,
}

/// Session token for a run started without an explicit id.
pub(crate) fn generate_session_id(execute_type: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{execute_type}-{millis}")
}

/// Build the child's classpath: `<app_home>/classes` first, then every jar
/// under `[paths].lib_dir`.
pub(crate) fn build_classpath(ctx: &LaunchContext) -> String {
    let cfg = &ctx.config;
    let mut cp = cfg
        .paths
        .app_home
        .join("classes")
        .to_string_lossy()
        .into_owned();

    let base_path = format!("{}{MAIN_SEPARATOR}", cfg.paths.lib_dir.display());
    append_jar_files(
        ctx.fs.as_ref(),
        CP_SEPARATOR,
        &mut cp,
        &cfg.paths.lib_dir,
        &base_path,
    );
    cp
}

/// Directory for the child's log output: the spec's explicit path if set,
/// else the process-wide default. Never empty in the final command.
pub(crate) fn resolved_log_dir(spec: &LaunchSpec, paths: &dyn SystemPaths) -> String {
    match &spec.log_file_path {
        Some(path) => path.clone(),
        None => paths.log_dir().to_string_lossy().into_owned(),
    }
}
