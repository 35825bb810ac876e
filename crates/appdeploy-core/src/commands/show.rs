//! Show-configuration command: print the effective configuration.

use anyhow::Context;
use serde::Serialize;

use crate::config::{DeployConfig, DescriptorConfig, StageConfig, ToolsConfig};
use crate::context::DeployContext;
use crate::types::Environment;

/// Paths derived from the configuration and its defaults.
#[derive(Debug, Clone, Serialize)]
pub struct EffectivePaths {
    pub project_root: String,
    pub staging_directory: String,
    pub appengine_directory: String,
    pub descriptor: String,
}

#[derive(Debug, Serialize)]
struct ShowDocument<'a> {
    environment: Environment,
    deploy: &'a DeployConfig,
    stage: &'a StageConfig,
    tools: &'a ToolsConfig,
    descriptor: &'a DescriptorConfig,
    effective: EffectivePaths,
}

pub fn effective_paths(ctx: &DeployContext) -> EffectivePaths {
    EffectivePaths {
        project_root: ctx.project_root().display().to_string(),
        staging_directory: ctx.staging_dir().display().to_string(),
        appengine_directory: ctx.appengine_dir().display().to_string(),
        descriptor: ctx.descriptor_path().display().to_string(),
    }
}

/// Render the merged configuration plus an `[effective]` table as TOML.
///
/// Sentinels are shown as written; nothing is resolved here.
pub fn show_configuration(ctx: &DeployContext) -> anyhow::Result<String> {
    let config = ctx.config();
    let document = ShowDocument {
        environment: config.environment,
        deploy: &config.deploy,
        stage: &config.stage,
        tools: &config.tools,
        descriptor: &config.descriptor,
        effective: effective_paths(ctx),
    };
    toml::to_string_pretty(&document).context("Failed to render configuration")
}
