#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use joblaunch::config::{
    ConfigFile, EngineSection, JobSection, PathsSection, RawConfigFile, RuntimeSection,
};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                paths: PathsSection::default(),
                engine: EngineSection::default(),
                runtime: RuntimeSection::default(),
                job: BTreeMap::new(),
            },
        }
    }

    pub fn with_job(mut self, kind: &str, section: JobSection) -> Self {
        self.config.job.insert(kind.to_string(), section);
        self
    }

    pub fn with_java_command(mut self, command: &str) -> Self {
        self.config.paths.java_command = command.to_string();
        self
    }

    pub fn with_app_home(mut self, path: &str) -> Self {
        self.config.paths.app_home = PathBuf::from(path);
        self
    }

    pub fn with_log_dir(mut self, path: &str) -> Self {
        self.config.paths.log_dir = PathBuf::from(path);
        self
    }

    pub fn with_lib_dir(mut self, path: &str) -> Self {
        self.config.paths.lib_dir = PathBuf::from(path);
        self
    }

    pub fn with_engine_url(mut self, url: &str) -> Self {
        self.config.engine.url = url.to_string();
        self
    }

    pub fn with_runtime_option(mut self, option: &str) -> Self {
        self.config.runtime.options.push(option.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `JobSection`.
pub struct JobSectionBuilder {
    section: JobSection,
}

impl JobSectionBuilder {
    pub fn new(main_class: &str) -> Self {
        Self {
            section: JobSection {
                main_class: main_class.to_string(),
                options: vec![],
                args: vec![],
            },
        }
    }

    pub fn option(mut self, option: &str) -> Self {
        self.section.options.push(option.to_string());
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.section.args.push(arg.to_string());
        self
    }

    pub fn build(self) -> JobSection {
        self.section
    }
}
