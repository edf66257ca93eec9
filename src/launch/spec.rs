// src/launch/spec.rs

//! Launch specification builder.
//!
//! A [`LaunchSpec`] collects the logical options for one job launch through
//! a chain of fluent calls. Setters never validate; missing values resolve
//! to defaults at assembly time.

use std::fmt;
use std::path::MAIN_SEPARATOR;
use std::sync::Arc;

use crate::exec::JobExecutor;
use crate::fs::SystemPaths;

/// Remote-debug flags: the child blocks at startup until a debugger
/// attaches on local port 8000.
const REMOTE_DEBUG_OPTIONS: [&str; 2] = [
    "-Xdebug",
    "-Xrunjdwp:transport=dt_socket,server=y,suspend=y,address=localhost:8000",
];

/// Rotation policy appended to every GC log flag.
const GC_LOG_ROTATION: &str = ":utctime,pid,tags:filecount=32,filesize=64m";

/// Options for one job launch, consumed exactly once by a concrete
/// [`ExecJob`](crate::jobs::ExecJob).
#[derive(Clone)]
pub struct LaunchSpec {
    pub(crate) execute_type: String,
    pub(crate) session_id: Option<String>,
    pub(crate) use_local_engine: bool,
    pub(crate) log_file_path: Option<String>,
    pub(crate) log_level: Option<String>,
    pub(crate) runtime_options: Vec<String>,
    pub(crate) runtime_env: Option<String>,
    pub(crate) executor: Option<Arc<dyn JobExecutor>>,
}

impl LaunchSpec {
    /// Create an empty spec for the given execute type token.
    pub fn new(execute_type: impl Into<String>) -> Self {
        Self {
            execute_type: execute_type.into(),
            session_id: None,
            use_local_engine: true,
            log_file_path: None,
            log_level: None,
            runtime_options: Vec::new(),
            runtime_env: None,
            executor: None,
        }
    }

    /// Hand-off target for the assembled command. Not owned logically; the
    /// spec only keeps a reference for `execute()` to use.
    pub fn job_executor(mut self, executor: Arc<dyn JobExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn log_file_path(mut self, log_file_path: impl Into<String>) -> Self {
        self.log_file_path = Some(log_file_path.into());
        self
    }

    pub fn log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = Some(log_level.into());
        self
    }

    /// Whether the child colocates with a local search engine instance
    /// rather than using the configured remote one. Defaults to `true`.
    pub fn use_local_engine(mut self, use_local_engine: bool) -> Self {
        self.use_local_engine = use_local_engine;
        self
    }

    pub fn runtime_env(mut self, env: impl Into<String>) -> Self {
        self.runtime_env = Some(env.into());
        self
    }

    /// Append the fixed flags enabling a blocking remote-debug listener.
    ///
    /// No deduplication: calling this twice appends the pair twice.
    pub fn remote_debug(self) -> Self {
        self.add_options(REMOTE_DEBUG_OPTIONS)
    }

    /// Append a flag enabling detailed GC logging in the child.
    ///
    /// The log lands in `<dir>/gc-<execute_type>.log`, where `<dir>` is the
    /// configured `log_file_path` if set, falling back to the injected
    /// system default.
    pub fn gc_logging(self, paths: &dyn SystemPaths) -> Self {
        let dir = match &self.log_file_path {
            Some(path) => path.clone(),
            None => paths.log_dir().to_string_lossy().into_owned(),
        };
        let flag = format!(
            "-Xlog:gc*,gc+age=trace,safepoint:file={dir}{MAIN_SEPARATOR}gc-{}.log{GC_LOG_ROTATION}",
            self.execute_type
        );
        self.add_options([flag])
    }

    /// Append runtime flags in the order given.
    ///
    /// Order is preserved verbatim into the final command; later flags may
    /// override earlier ones in the JVM.
    pub fn add_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for opt in options {
            self.runtime_options.push(opt.into());
        }
        self
    }

    pub fn execute_type(&self) -> &str {
        &self.execute_type
    }

    /// Runtime flags accumulated so far, in call order.
    pub fn options(&self) -> &[String] {
        &self.runtime_options
    }

    pub fn executor(&self) -> Option<&Arc<dyn JobExecutor>> {
        self.executor.as_ref()
    }
}

impl fmt::Debug for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchSpec")
            .field("execute_type", &self.execute_type)
            .field("session_id", &self.session_id)
            .field("use_local_engine", &self.use_local_engine)
            .field("log_file_path", &self.log_file_path)
            .field("log_level", &self.log_level)
            .field("runtime_options", &self.runtime_options)
            .field("runtime_env", &self.runtime_env)
            .field("executor", &self.executor.as_ref().map(|_| "<executor>"))
            .finish()
    }
}
