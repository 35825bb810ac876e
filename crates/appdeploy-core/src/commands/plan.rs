//! Deploy planning: resolve every target identifier once, up front.

use std::path::{Path, PathBuf};

use crate::context::DeployContext;
use crate::deploy::{DeployTargetError, resolver_for};
use crate::gcloud::SdkConfig;
use crate::types::Environment;

/// Fully resolved deployment targets for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub environment: Environment,
    /// `None` lets gcloud use its configured default.
    pub project_id: Option<String>,
    /// `None` lets gcloud generate a version.
    pub version: Option<String>,
    pub staging_dir: PathBuf,
    pub appengine_dir: PathBuf,
}

impl DeployPlan {
    /// Resolve project id and version for `ctx`.
    pub fn build(ctx: &DeployContext, sdk: &dyn SdkConfig) -> Result<Self, DeployTargetError> {
        let config = ctx.config();
        let resolver = resolver_for(
            ctx.environment(),
            ctx.descriptor_path().to_path_buf(),
            sdk,
        );

        let project_id = resolver.project(config.deploy.project_id.as_deref())?;
        let version = resolver.version(config.deploy.version.as_deref())?;

        tracing::debug!(
            environment = %ctx.environment(),
            project_id = ?project_id,
            version = ?version,
            "Resolved deploy targets"
        );

        Ok(Self {
            environment: ctx.environment(),
            project_id,
            version,
            staging_dir: ctx.staging_dir().to_path_buf(),
            appengine_dir: ctx.appengine_dir().to_path_buf(),
        })
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    pub fn appengine_dir(&self) -> &Path {
        &self.appengine_dir
    }
}
