//! Read-only access to the persisted gcloud configuration.

use anyhow::Context;

use super::Gcloud;

/// Local SDK configuration as seen by deploy target resolution.
pub trait SdkConfig {
    /// The persisted `core/project` value, if any.
    fn project(&self) -> anyhow::Result<Option<String>>;
}

impl SdkConfig for Gcloud {
    fn project(&self) -> anyhow::Result<Option<String>> {
        let stdout = self.output(&["config", "list", "--format=json"])?;
        parse_config_project(&stdout)
    }
}

/// Extract `core.project` from `gcloud config list --format=json` output.
pub fn parse_config_project(json: &str) -> anyhow::Result<Option<String>> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Failed to parse gcloud config output")?;
    let project = value
        .get("core")
        .and_then(|core| core.get("project"))
        .and_then(|project| project.as_str())
        .map(str::trim)
        .filter(|project| !project.is_empty())
        .map(str::to_string);
    Ok(project)
}
