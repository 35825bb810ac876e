//! Configuration schema for appengine.toml
//!
//! One file per project, in the project root. Every section is optional;
//! unset values fall back to the defaults in [`super::defaults`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::Environment;

/// Root configuration structure for appengine.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppEngineConfig {
    /// Target environment: standard or flexible
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub stage: StageConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub descriptor: DescriptorConfig,
}

/// `[deploy]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Literal project id, GCLOUD_CONFIG or APPENGINE_CONFIG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Literal version, GCLOUD_CONFIG or APPENGINE_CONFIG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Directory holding cron/dispatch/dos/index/queue descriptors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appengine_directory: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promote: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_previous_version: Option<bool>,

    /// Staging bucket (gs://...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    /// Prebuilt container image (flexible only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

/// `[stage]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_directory: Option<PathBuf>,
}

/// `[tools]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_sdk_home: Option<PathBuf>,
}

/// `[descriptor]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorConfig {
    /// Path to appengine-web.xml
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppEngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(bucket) = &self.deploy.bucket {
            if !bucket.starts_with("gs://") {
                anyhow::bail!("Invalid deploy bucket '{}': must start with gs://", bucket);
            }
        }

        if self.deploy.image_url.is_some() && self.environment == Environment::Standard {
            anyhow::bail!("deploy.image_url is only supported for flexible environment projects");
        }

        Ok(())
    }
}
