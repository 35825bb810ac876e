//! Deploy command implementation.
//!
//! Resolves the deploy plan, selects the descriptors for the requested target
//! and hands them to gcloud (or prints the command line on a dry run).

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::context::DeployContext;
use crate::deploy::{DeployableKind, collect_deployables, deployable_path};
use crate::gcloud::{DeployRequest, DeployRunner, SdkConfig};

use super::plan::DeployPlan;

/// What to deploy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTarget {
    /// The application itself (staged app.yaml)
    App,
    /// app.yaml plus every auxiliary descriptor that exists
    All,
    /// A single auxiliary descriptor
    Descriptor(DeployableKind),
}

impl DeployTarget {
    pub fn describe(self) -> String {
        match self {
            DeployTarget::App => "application".to_string(),
            DeployTarget::All => "application and descriptors".to_string(),
            DeployTarget::Descriptor(kind) => kind.file_name().to_string(),
        }
    }
}

/// Options for the deploy command
#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub target: DeployTarget,
    /// Print the gcloud command instead of running it
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(target: DeployTarget) -> Self {
        Self {
            target,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Report from a deploy operation
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub plan: DeployPlan,
    pub request: DeployRequest,
    /// False on a dry run
    pub executed: bool,
}

impl DeployReport {
    /// Shell-style rendering of the gcloud invocation.
    pub fn command_line(&self, executable: &Path) -> String {
        std::iter::once(executable.display().to_string())
            .chain(self.request.to_args())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Deploy command orchestrator
#[derive(Debug)]
pub struct DeployCommand<'a> {
    ctx: &'a DeployContext,
}

impl<'a> DeployCommand<'a> {
    pub fn new(ctx: &'a DeployContext) -> Self {
        Self { ctx }
    }

    /// Resolve targets and build the gcloud request without running anything.
    pub fn prepare(
        &self,
        target: DeployTarget,
        sdk: &dyn SdkConfig,
    ) -> anyhow::Result<(DeployPlan, DeployRequest)> {
        let staging_dir = self.ctx.staging_dir();
        if !staging_dir.is_dir() {
            anyhow::bail!(
                "Staging directory does not exist: {}. Stage the application before deploying.",
                staging_dir.display()
            );
        }

        let plan = DeployPlan::build(self.ctx, sdk)?;
        let deployables = self.select_deployables(target, &plan)?;

        let deploy = &self.ctx.config().deploy;
        let request = DeployRequest {
            deployables,
            project_id: plan.project_id.clone(),
            version: plan.version.clone(),
            promote: deploy.promote,
            stop_previous_version: deploy.stop_previous_version,
            bucket: deploy.bucket.clone(),
            image_url: deploy.image_url.clone(),
            server: deploy.server.clone(),
        };

        Ok((plan, request))
    }

    /// Deploy `options.target` through `runner`.
    pub fn execute(
        &self,
        options: &DeployOptions,
        sdk: &dyn SdkConfig,
        runner: &dyn DeployRunner,
    ) -> anyhow::Result<DeployReport> {
        let (plan, request) = self.prepare(options.target, sdk)?;

        if options.dry_run {
            tracing::info!(target = %options.target.describe(), "Dry run, not deploying");
        } else {
            runner
                .deploy(&request)
                .with_context(|| format!("Failed to deploy {}", options.target.describe()))?;
        }

        Ok(DeployReport {
            plan,
            request,
            executed: !options.dry_run,
        })
    }

    fn select_deployables(
        &self,
        target: DeployTarget,
        plan: &DeployPlan,
    ) -> anyhow::Result<Vec<PathBuf>> {
        match target {
            DeployTarget::App => Ok(vec![required_deployable(DeployableKind::App, plan)?]),
            DeployTarget::All => {
                let deployables =
                    collect_deployables(plan.staging_dir(), Some(plan.appengine_dir()));
                if deployables.is_empty() {
                    anyhow::bail!(
                        "No deployable descriptors found in {} or {}",
                        plan.staging_dir().display(),
                        plan.appengine_dir().display()
                    );
                }
                Ok(deployables)
            }
            DeployTarget::Descriptor(kind) => Ok(vec![required_deployable(kind, plan)?]),
        }
    }
}

fn required_deployable(kind: DeployableKind, plan: &DeployPlan) -> anyhow::Result<PathBuf> {
    let path = deployable_path(kind, plan.staging_dir(), Some(plan.appengine_dir()));
    if !path.is_file() {
        anyhow::bail!("{} not found: {}", kind.file_name(), path.display());
    }
    Ok(path)
}
