// src/logging.rs

//! Tracing setup for the launcher process itself.
//!
//! The child process gets its own log directives through `-Dapp.log.*`
//! flags; this module only configures the launcher's diagnostics. Verbosity
//! resolves in order: the `--log-level` flag, then the `JOBLAUNCH_LOG`
//! environment variable (a full `tracing` filter directive, e.g.
//! `joblaunch=debug`), then `info`. Output goes to stderr so stdout stays
//! reserved for the session token printed after a successful hand-off.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

const LOG_ENV_VAR: &str = "JOBLAUNCH_LOG";

/// Install the global subscriber. Call once, before the first launch step.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(filter_directive(level)),
        None => EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("info")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
