// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{LaunchError, Result};
use crate::types::JobKind;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::LaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(
            raw.paths,
            raw.engine,
            raw.runtime,
            raw.job,
        ))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_jobs(cfg)?;
    validate_paths(cfg)?;
    validate_jobs(cfg)?;
    Ok(())
}

fn ensure_has_jobs(cfg: &RawConfigFile) -> Result<()> {
    if cfg.job.is_empty() {
        return Err(LaunchError::ConfigError(
            "config must contain at least one [job.<kind>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_paths(cfg: &RawConfigFile) -> Result<()> {
    if cfg.paths.java_command.trim().is_empty() {
        return Err(LaunchError::ConfigError(
            "[paths].java_command must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_jobs(cfg: &RawConfigFile) -> Result<()> {
    for (name, section) in cfg.job.iter() {
        if name.parse::<JobKind>().is_err() {
            return Err(LaunchError::ConfigError(format!(
                "unknown job kind '{}' in [job.{}]",
                name, name
            )));
        }
        if section.main_class.trim().is_empty() {
            return Err(LaunchError::ConfigError(format!(
                "[job.{}].main_class must not be empty",
                name
            )));
        }
    }
    Ok(())
}
