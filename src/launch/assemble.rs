// src/launch/assemble.rs

//! Command assembly primitives.
//!
//! Concrete jobs own their baseline flags, property whitelist and trailing
//! arguments; this module owns the helper primitives and the shape of the
//! final command. The ordering contract every job reproduces is:
//!
//! 1. interpreter path
//! 2. `-cp` and the classpath
//! 3. fixed baseline flags (`[runtime].options`, then `[job.<kind>].options`)
//! 4. whitelisted inherited properties, in the order the job declares them
//! 5. log path / log level flags
//! 6. engine selection flag
//! 7. options accumulated on the launch spec, verbatim
//! 8. environment profile flag
//! 9. main class
//! 10. trailing job arguments
//!
//! Later JVM flags override earlier ones, so stages 3-7 run from least to
//! most specific.

use std::fmt::Debug;
use std::path::PathBuf;

/// Read-only lookup of tunables set on the launching process.
///
/// Stands in for JVM-style system properties. Production code reads the
/// process environment; tests substitute a fixed map.
pub trait PropertySource: Send + Sync + Debug {
    fn get(&self, name: &str) -> Option<String>;
}

/// `PropertySource` backed by the launcher's own environment.
#[derive(Debug, Clone, Default)]
pub struct EnvProperties;

impl PropertySource for EnvProperties {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fully assembled child-process command, ready to hand to a
/// [`JobExecutor`](crate::exec::JobExecutor).
#[derive(Debug, Clone, Default)]
pub struct AssembledCommand {
    /// Interpreter to invoke (e.g. `java`).
    pub program: String,

    /// Ordered argument vector.
    pub args: Vec<String>,

    /// Extra environment variables for the child.
    pub env: Vec<(String, String)>,

    /// Per-session temp directory to delete once the child exits.
    pub temp_dir: Option<PathBuf>,
}

/// Forward a whitelisted tunable from the launching process to the child.
///
/// - property present: emits `-D{name}={value}`, with `append` (if any)
///   appended to the present value,
/// - property absent but `default` given: emits `-D{name}={default}`,
/// - both absent: emits nothing.
pub fn add_system_property(
    props: &dyn PropertySource,
    cmd: &mut Vec<String>,
    name: &str,
    default: Option<&str>,
    append: Option<&str>,
) {
    match props.get(name) {
        Some(value) => {
            let mut flag = format!("-D{name}={value}");
            if let Some(suffix) = append {
                flag.push_str(suffix);
            }
            cmd.push(flag);
        }
        None => {
            if let Some(default) = default {
                cmd.push(format!("-D{name}={default}"));
            }
        }
    }
}
