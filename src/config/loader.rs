// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Deserialize a TOML config file without semantic validation.
///
/// Most callers want [`load_and_validate`] instead; this exists for tooling
/// that inspects a config without caring whether its job kinds are known.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: RawConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Read, deserialize and validate a config file.
///
/// Serde fills section defaults; the `TryFrom` conversion then rejects
/// configs with no `[job.<kind>]` sections, unknown job kinds, empty entry
/// points or an empty interpreter path.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw = load_from_path(path)?;
    let config = ConfigFile::try_from(raw)?;
    Ok(config)
}
