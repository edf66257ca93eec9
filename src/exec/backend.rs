// src/exec/backend.rs

//! Process-spawning collaborator.
//!
//! Jobs hand a fully assembled command to a [`JobExecutor`] and never touch
//! the child process themselves: no waiting, no output handling, no handle
//! retained after the hand-off. The executor owns all of that.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::errors::{LaunchError, Result};
use crate::fs::FileSystem;
use crate::launch::{delete_temp_dir, AssembledCommand};

/// Handle returned once the child has been spawned.
#[derive(Debug, Clone)]
pub struct LaunchedJob {
    pub pid: Option<u32>,
}

/// Trait abstracting how an assembled command becomes a running process.
///
/// Production code uses [`ProcessJobExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait JobExecutor: Send + Sync {
    /// Spawn the child process described by `cmd`.
    ///
    /// Resolves as soon as the process has been handed off; the
    /// implementation owns any waiting, output draining and temp-dir
    /// cleanup.
    fn launch(
        &self,
        cmd: AssembledCommand,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchedJob>> + Send + '_>>;
}

/// Real executor used in production.
///
/// Each launch spawns a watcher task that drains the child's stderr, logs
/// its exit status and removes the session temp dir. Those tasks are
/// tracked here so [`wait_for_children`](Self::wait_for_children) can keep
/// the runtime alive until they finish.
pub struct ProcessJobExecutor {
    fs: Arc<dyn FileSystem>,
    watchers: Mutex<Vec<JoinHandle<()>>>,
}

impl ProcessJobExecutor {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            watchers: Mutex::new(Vec::new()),
        }
    }

    /// Wait until every launched child has exited and its temp dir has
    /// been removed.
    ///
    /// `launch` resolves at hand-off; the exit logging and cleanup run in
    /// watcher tasks that die with the runtime unless awaited here.
    pub async fn wait_for_children(&self) {
        let watchers: Vec<_> = self.watchers.lock().unwrap().drain(..).collect();
        for watcher in watchers {
            if let Err(err) = watcher.await {
                warn!(error = %err, "child watcher task failed");
            }
        }
    }
}

impl JobExecutor for ProcessJobExecutor {
    fn launch(
        &self,
        cmd: AssembledCommand,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchedJob>> + Send + '_>> {
        let fs = Arc::clone(&self.fs);

        Box::pin(async move {
            let mut command = Command::new(&cmd.program);
            command
                .args(&cmd.args)
                .envs(cmd.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .stdout(Stdio::null())
                .stderr(Stdio::piped());

            let mut child = command
                .spawn()
                .map_err(|e| LaunchError::Executor(format!("spawning {}: {e}", cmd.program)))?;

            let pid = child.id();
            info!(program = %cmd.program, pid, "job process spawned");

            let stderr = child.stderr.take();
            let program = cmd.program.clone();
            let temp_dir = cmd.temp_dir.clone();

            // Wait for the child off to the side; the launch caller never
            // blocks on it. Once the process is gone, its temp dir goes too.
            let watcher = tokio::spawn(async move {
                if let Some(stderr) = stderr {
                    let reader = BufReader::new(stderr);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        debug!(program = %program, "stderr: {}", line);
                    }
                }

                match child.wait().await {
                    Ok(status) => {
                        info!(
                            program = %program,
                            exit_code = status.code(),
                            success = status.success(),
                            "job process exited"
                        );
                    }
                    Err(err) => {
                        warn!(program = %program, error = %err, "failed waiting for job process");
                    }
                }

                delete_temp_dir(fs.as_ref(), temp_dir.as_deref());
            });
            self.watchers.lock().unwrap().push(watcher);

            Ok(LaunchedJob { pid })
        })
    }
}
