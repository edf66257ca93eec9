// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `joblaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "joblaunch",
    version,
    about = "Launch worker jobs (crawler, thumbnail) as separate JVM processes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Joblaunch.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Joblaunch.toml")]
    pub config: String,

    /// Job kind to launch (crawler, thumbnail).
    #[arg(long, value_name = "KIND")]
    pub job: String,

    /// Session id correlating this launch with a tracked run.
    ///
    /// Generated from the current time when omitted.
    #[arg(long, value_name = "ID")]
    pub session_id: Option<String>,

    /// Directory for the child process's log output.
    ///
    /// If omitted, `[paths].log_dir` from the config file is used.
    #[arg(long, value_name = "DIR")]
    pub job_log_path: Option<String>,

    /// Log verbosity for the child process (passed through as a flag).
    #[arg(long, value_name = "LEVEL")]
    pub job_log_level: Option<String>,

    /// Runtime environment profile for the child process.
    #[arg(long, value_name = "NAME")]
    pub env: Option<String>,

    /// Suspend the child at startup awaiting a debugger attach on local
    /// port 8000.
    #[arg(long)]
    pub remote_debug: bool,

    /// Enable detailed GC logging in the child process.
    #[arg(long)]
    pub gc_logging: bool,

    /// Use the remote search engine from `[engine].url` instead of a
    /// colocated local instance.
    #[arg(long)]
    pub remote_engine: bool,

    /// Extra JVM flag for the child, appended in the order given; may be
    /// repeated.
    #[arg(long = "opt", value_name = "FLAG")]
    pub options: Vec<String>,

    /// Assemble and print the command, but don't spawn anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level for the launcher itself (error, warn, info, debug, trace).
    ///
    /// If omitted, `JOBLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
