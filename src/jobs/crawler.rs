// src/jobs/crawler.rs

//! Launches the web/file crawler as its own JVM process.

use std::future::Future;
use std::path::{PathBuf, MAIN_SEPARATOR};
use std::pin::Pin;

use tracing::info;

use crate::errors::{LaunchError, Result};
use crate::jobs::{build_classpath, generate_session_id, resolved_log_dir, ExecJob, LaunchContext};
use crate::launch::{add_system_property, AssembledCommand, LaunchSpec};

pub struct CrawlerJob {
    ctx: LaunchContext,
    spec: LaunchSpec,
    session_id: String,
}

impl CrawlerJob {
    pub const EXECUTE_TYPE: &'static str = "crawler";

    pub fn new(ctx: LaunchContext, spec: LaunchSpec) -> Self {
        let session_id = spec
            .session_id
            .clone()
            .unwrap_or_else(|| generate_session_id(Self::EXECUTE_TYPE));
        Self {
            ctx,
            spec,
            session_id,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

impl ExecJob for CrawlerJob {
    fn execute_type(&self) -> &'static str {
        Self::EXECUTE_TYPE
    }

    fn assemble(&self) -> Result<AssembledCommand> {
        let cfg = &self.ctx.config;
        let section = cfg.job_section(Self::EXECUTE_TYPE).ok_or_else(|| {
            LaunchError::ConfigError(format!("missing [job.{}] section", Self::EXECUTE_TYPE))
        })?;

        let mut args = Vec::new();

        args.push("-cp".to_string());
        args.push(build_classpath(&self.ctx));

        // Baseline flags, global then crawler-specific.
        args.extend(cfg.runtime.options.iter().cloned());
        args.extend(section.options.iter().cloned());

        // Tunables inherited from this process when explicitly whitelisted.
        // The crawler additionally forwards proxy settings since it talks to
        // the outside world.
        let props = self.ctx.props.as_ref();
        add_system_property(props, &mut args, "java.awt.headless", Some("true"), None);
        add_system_property(props, &mut args, "file.encoding", Some("UTF-8"), None);
        let tmp_suffix = format!("{MAIN_SEPARATOR}job_tmp_{}", self.session_id);
        add_system_property(props, &mut args, "java.io.tmpdir", None, Some(&tmp_suffix));
        add_system_property(props, &mut args, "http.proxyHost", None, None);
        add_system_property(props, &mut args, "http.proxyPort", None, None);

        // The child gets a session-scoped temp dir; the executor removes it
        // once the process exits.
        let temp_dir = props
            .get("java.io.tmpdir")
            .map(|base| PathBuf::from(base).join(format!("job_tmp_{}", self.session_id)));

        args.push(format!(
            "-Dapp.log.path={}",
            resolved_log_dir(&self.spec, self.ctx.paths.as_ref())
        ));
        if let Some(level) = &self.spec.log_level {
            args.push(format!("-Dapp.log.level={level}"));
        }

        if self.spec.use_local_engine {
            args.push("-Dsearch.engine.local=true".to_string());
        } else {
            args.push(format!("-Dsearch.engine.url={}", cfg.engine.url));
        }

        // Options accumulated on the spec, verbatim.
        args.extend(self.spec.options().iter().cloned());

        let mut env = Vec::new();
        if let Some(profile) = &self.spec.runtime_env {
            args.push(format!("-Dapp.env={profile}"));
            env.push(("APP_ENV".to_string(), profile.clone()));
        }

        args.push(section.main_class.clone());

        args.push("--session-id".to_string());
        args.push(self.session_id.clone());
        args.extend(section.args.iter().cloned());

        Ok(AssembledCommand {
            program: cfg.paths.java_command.clone(),
            args,
            env,
            temp_dir,
        })
    }

    fn execute(&mut self) -> Pin<Box<dyn Future<Output = Result<String>> + Send + '_>> {
        Box::pin(async move {
            let cmd = self.assemble()?;
            let executor = self.spec.executor().cloned().ok_or_else(|| {
                LaunchError::ConfigError("no job executor configured".to_string())
            })?;

            let job = executor.launch(cmd).await?;
            info!(
                session = %self.session_id,
                pid = job.pid,
                "crawler launch handed off"
            );

            Ok(self.session_id.clone())
        })
    }
}
