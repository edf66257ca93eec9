// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod jobs;
pub mod launch;
pub mod logging;
pub mod types;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::errors::{LaunchError, Result};
use crate::exec::{JobExecutor, ProcessJobExecutor};
use crate::fs::{ConfigPaths, FileSystem, RealFileSystem, SystemPaths};
use crate::jobs::{CrawlerJob, ExecJob, LaunchContext, ThumbnailJob};
use crate::launch::{AssembledCommand, EnvProperties, LaunchSpec, PropertySource};
use crate::types::JobKind;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the launch spec built from CLI flags
/// - the concrete job kind
/// - the process executor (skipped in `--dry-run`)
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let kind: JobKind = args.job.parse().map_err(LaunchError::ConfigError)?;

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let paths: Arc<dyn SystemPaths> = Arc::new(ConfigPaths::new(cfg.paths.log_dir.clone()));
    let props: Arc<dyn PropertySource> = Arc::new(EnvProperties);

    let mut spec = LaunchSpec::new(kind.execute_type());
    if let Some(id) = &args.session_id {
        spec = spec.session_id(id);
    }
    if let Some(dir) = &args.job_log_path {
        spec = spec.log_file_path(dir);
    }
    if let Some(level) = &args.job_log_level {
        spec = spec.log_level(level);
    }
    if let Some(env) = &args.env {
        spec = spec.runtime_env(env);
    }
    spec = spec.use_local_engine(!args.remote_engine);
    if args.remote_debug {
        spec = spec.remote_debug();
    }
    if args.gc_logging {
        spec = spec.gc_logging(paths.as_ref());
    }
    spec = spec.add_options(args.options.iter().cloned());

    let executor = if args.dry_run {
        None
    } else {
        Some(Arc::new(ProcessJobExecutor::new(Arc::clone(&fs))))
    };
    if let Some(executor) = &executor {
        spec = spec.job_executor(Arc::clone(executor) as Arc<dyn JobExecutor>);
    }

    let ctx = LaunchContext {
        config: cfg,
        fs,
        paths,
        props,
    };

    let mut job: Box<dyn ExecJob> = match kind {
        JobKind::Crawler => Box::new(CrawlerJob::new(ctx, spec)),
        JobKind::Thumbnail => Box::new(ThumbnailJob::new(ctx, spec)),
    };

    if args.dry_run {
        print_dry_run(job.as_ref(), job.assemble()?);
        return Ok(());
    }

    let session = job.execute().await?;
    info!(job = %kind, session = %session, "job launch handed off");
    println!("{session}");

    // Stay alive until the child exits so its temp dir gets removed;
    // returning earlier would abort the executor's watcher task.
    if let Some(executor) = &executor {
        executor.wait_for_children().await;
    }
    Ok(())
}

/// Simple dry-run output: print the command that would be spawned.
fn print_dry_run(job: &dyn ExecJob, cmd: AssembledCommand) {
    println!("joblaunch dry-run ({})", job.execute_type());
    println!("  program: {}", cmd.program);
    for arg in &cmd.args {
        println!("    {arg}");
    }
    for (name, value) in &cmd.env {
        println!("  env: {name}={value}");
    }
    if let Some(dir) = &cmd.temp_dir {
        println!("  temp dir (deleted after exit): {}", dir.display());
    }

    debug!("dry-run complete (no execution)");
}
