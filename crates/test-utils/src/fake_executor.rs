//! Fake collaborators for tests: an executor that records commands instead
//! of spawning processes, and a map-backed property source.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use joblaunch::errors::Result;
use joblaunch::exec::{JobExecutor, LaunchedJob};
use joblaunch::launch::{AssembledCommand, PropertySource};

/// A fake executor that:
/// - records every assembled command handed to it
/// - immediately reports a successful hand-off without spawning anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    commands: Arc<Mutex<Vec<AssembledCommand>>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in hand-off order.
    pub fn commands(&self) -> Vec<AssembledCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl JobExecutor for RecordingExecutor {
    fn launch(
        &self,
        cmd: AssembledCommand,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchedJob>> + Send + '_>> {
        let commands = Arc::clone(&self.commands);

        Box::pin(async move {
            commands.lock().unwrap().push(cmd);
            Ok(LaunchedJob { pid: None })
        })
    }
}

/// Map-backed `PropertySource` standing in for the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapProperties {
    values: HashMap<String, String>,
}

impl MapProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

impl PropertySource for MapProperties {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
