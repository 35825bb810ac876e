//! Application context for unified dependency injection.

use std::path::{Path, PathBuf};

use crate::config::{AppEngineConfig, ConfigOverrides, ConfigStore, defaults, merge_overrides};
use crate::gcloud::Gcloud;
use crate::types::Environment;

/// Effective configuration for one invocation.
///
/// Holds the merged config plus every path resolved against the project root.
/// Frontends create this once and pass it to commands.
#[derive(Debug, Clone)]
pub struct DeployContext {
    project_root: PathBuf,
    config: AppEngineConfig,
    staging_dir: PathBuf,
    appengine_dir: PathBuf,
    descriptor_path: PathBuf,
}

impl DeployContext {
    /// Build a context from an already merged configuration.
    pub fn new(project_root: PathBuf, config: AppEngineConfig) -> Self {
        let staging_dir =
            defaults::staging_directory(&project_root, config.stage.staging_directory.as_deref());
        let appengine_dir = defaults::appengine_directory(
            config.environment,
            &project_root,
            &staging_dir,
            config.deploy.appengine_directory.as_deref(),
        );
        let descriptor_path =
            defaults::descriptor_path(&project_root, config.descriptor.path.as_deref());

        Self {
            project_root,
            config,
            staging_dir,
            appengine_dir,
            descriptor_path,
        }
    }

    /// Load appengine.toml from the store and apply command-line overrides.
    pub fn load(store: &ConfigStore, overrides: ConfigOverrides) -> anyhow::Result<Self> {
        let config = merge_overrides(store.load()?, overrides);
        config.validate()?;
        Ok(Self::new(store.project_root().to_path_buf(), config))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> &AppEngineConfig {
        &self.config
    }

    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Directory the auxiliary descriptors are read from.
    pub fn appengine_dir(&self) -> &Path {
        &self.appengine_dir
    }

    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    /// Get a Gcloud handle for the configured SDK.
    pub fn gcloud(&self) -> anyhow::Result<Gcloud> {
        let sdk_home = self
            .config
            .tools
            .cloud_sdk_home
            .as_deref()
            .map(|home| defaults::resolve_path(&self.project_root, home));
        Gcloud::locate(sdk_home.as_deref())
    }
}
