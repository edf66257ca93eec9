// src/launch/classpath.rs

//! Classpath assembly from a directory of jar archives.

use std::path::Path;

use tracing::debug;

use crate::fs::FileSystem;

/// Append every `.jar` directly under `lib_dir` to `buf` as
/// `separator + base_path + file_name`.
///
/// The extension match is case-insensitive. Entries are sorted by file name
/// so the resulting classpath is stable across platforms. A directory that
/// cannot be listed contributes nothing.
pub fn append_jar_files(
    fs: &dyn FileSystem,
    separator: &str,
    buf: &mut String,
    lib_dir: &Path,
    base_path: &str,
) {
    let entries = match fs.read_dir(lib_dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(
                dir = ?lib_dir,
                error = %err,
                "library dir not listable; classpath contribution is empty"
            );
            return;
        }
    };

    let mut names: Vec<String> = entries
        .iter()
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()))
        .filter(|name| name.to_lowercase().ends_with(".jar"))
        .map(str::to_string)
        .collect();
    names.sort();

    for name in names {
        buf.push_str(separator);
        buf.push_str(base_path);
        buf.push_str(&name);
    }
}
