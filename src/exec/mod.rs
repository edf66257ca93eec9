// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for turning an assembled command into a real
//! child process using `tokio::process::Command`.
//!
//! - [`backend`] provides the `JobExecutor` trait and the concrete
//!   `ProcessJobExecutor` used in production; tests can replace it with a
//!   fake implementation that records commands instead of spawning.

pub mod backend;

pub use backend::{JobExecutor, LaunchedJob, ProcessJobExecutor};
