// src/launch/cleanup.rs

//! Best-effort removal of per-session temp directories.

use std::path::Path;

use tracing::warn;

use crate::fs::FileSystem;

/// Delete a job's own temp directory, if it has one.
///
/// Never fails: a deletion problem is logged as a warning and swallowed,
/// which makes this safe to call from a completion or cancellation handler
/// of the child process. `None` is a silent no-op, and calling this again
/// on an already-removed path only produces another warning.
pub fn delete_temp_dir(fs: &dyn FileSystem, dir: Option<&Path>) {
    let Some(dir) = dir else {
        return;
    };

    if let Err(err) = fs.remove_dir_all(dir) {
        warn!(dir = ?dir, error = %err, "could not delete temp dir");
    }
}
