//! `gcloud app deploy` invocation.

use std::path::PathBuf;

use super::Gcloud;

/// Fully resolved input for one `gcloud app deploy` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployRequest {
    pub deployables: Vec<PathBuf>,
    pub project_id: Option<String>,
    pub version: Option<String>,
    pub promote: Option<bool>,
    pub stop_previous_version: Option<bool>,
    pub bucket: Option<String>,
    pub image_url: Option<String>,
    pub server: Option<String>,
}

impl DeployRequest {
    pub fn new(deployables: Vec<PathBuf>) -> Self {
        Self {
            deployables,
            ..Self::default()
        }
    }

    /// Arguments passed to gcloud, excluding the executable itself.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["app".to_string(), "deploy".to_string()];
        args.extend(
            self.deployables
                .iter()
                .map(|path| path.display().to_string()),
        );

        if let Some(bucket) = &self.bucket {
            args.push(format!("--bucket={bucket}"));
        }
        if let Some(image_url) = &self.image_url {
            args.push(format!("--image-url={image_url}"));
        }
        if let Some(project_id) = &self.project_id {
            args.push(format!("--project={project_id}"));
        }
        push_toggle(&mut args, "promote", self.promote);
        if let Some(server) = &self.server {
            args.push(format!("--server={server}"));
        }
        push_toggle(&mut args, "stop-previous-version", self.stop_previous_version);
        if let Some(version) = &self.version {
            args.push(format!("--version={version}"));
        }
        args.push("--quiet".to_string());
        args
    }
}

fn push_toggle(args: &mut Vec<String>, flag: &str, value: Option<bool>) {
    match value {
        Some(true) => args.push(format!("--{flag}")),
        Some(false) => args.push(format!("--no-{flag}")),
        None => {}
    }
}

/// Executes a resolved deploy request.
pub trait DeployRunner {
    fn deploy(&self, request: &DeployRequest) -> anyhow::Result<()>;
}

impl DeployRunner for Gcloud {
    /// Deploy the request's descriptors. Output streams to the terminal.
    fn deploy(&self, request: &DeployRequest) -> anyhow::Result<()> {
        if request.deployables.is_empty() {
            anyhow::bail!("Nothing to deploy: no deployable descriptors were found");
        }
        let args = request.to_args();
        tracing::info!(
            gcloud = %self.executable().display(),
            deployables = request.deployables.len(),
            "Running gcloud app deploy"
        );
        self.run(&args)
    }
}
