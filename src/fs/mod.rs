// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface.
///
/// The launcher touches the filesystem in exactly two places (classpath
/// scanning and temp-dir cleanup), both reached through this trait so tests
/// can run against an in-memory implementation.
pub trait FileSystem: Send + Sync + Debug {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;

    /// Return a list of entries directly under a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Remove a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))? {
            let entry = entry?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        fs::remove_dir_all(path).with_context(|| format!("removing dir {:?}", path))
    }
}

/// Read-only provider of the process-wide default log directory.
///
/// The GC log flag falls back to this default when the launch spec carries
/// no explicit log path. Injected rather than global so tests can
/// substitute a fixed value.
pub trait SystemPaths: Send + Sync + Debug {
    fn log_dir(&self) -> PathBuf;
}

/// Default log directory sourced from the loaded config file.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    log_dir: PathBuf,
}

impl ConfigPaths {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }
}

impl SystemPaths for ConfigPaths {
    fn log_dir(&self) -> PathBuf {
        self.log_dir.clone()
    }
}
