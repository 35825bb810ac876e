//! Config store for loading and saving appengine.toml.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::{AppEngineConfig, defaults::config_path, parser};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: PathBuf,
    project_root: PathBuf,
}

impl ConfigStore {
    pub fn from_project_root(project_root: PathBuf) -> Self {
        Self {
            config_path: config_path(&project_root),
            project_root,
        }
    }

    /// Use an explicit config file; relative paths in it resolve against `project_root`.
    pub fn with_config_path(project_root: PathBuf, config_path: PathBuf) -> Self {
        Self {
            config_path,
            project_root,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn load(&self) -> anyhow::Result<AppEngineConfig> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "No config file, using defaults");
            return Ok(AppEngineConfig::new());
        }
        parser::parse_appengine_toml(&self.config_path)
    }

    pub fn save(&self, config: &AppEngineConfig) -> anyhow::Result<()> {
        let content = parser::to_toml(config).context("Failed to serialize config to TOML")?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(&self.config_path, content).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;
        Ok(())
    }
}
