//! Thin wrapper around the external `gcloud` binary.
//!
//! - Locating the executable (configured SDK home, default install, PATH)
//! - Reading the persisted gcloud configuration
//! - Running `gcloud app deploy`

mod config;
mod deploy;

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

pub use config::{SdkConfig, parse_config_project};
pub use deploy::{DeployRequest, DeployRunner};

#[cfg(windows)]
const GCLOUD_EXECUTABLE: &str = "gcloud.cmd";
#[cfg(not(windows))]
const GCLOUD_EXECUTABLE: &str = "gcloud";

/// Handle to a gcloud installation.
#[derive(Debug, Clone)]
pub struct Gcloud {
    executable: PathBuf,
}

impl Gcloud {
    /// Use an explicit executable path.
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    /// Locate gcloud, preferring an explicit Cloud SDK home.
    ///
    /// Falls back to `~/google-cloud-sdk` and finally to `gcloud` on `PATH`.
    pub fn locate(cloud_sdk_home: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(home) = cloud_sdk_home {
            let executable = Self::executable_in(home);
            if !executable.is_file() {
                anyhow::bail!(
                    "gcloud not found in configured Cloud SDK home: {}",
                    executable.display()
                );
            }
            return Ok(Self::new(executable));
        }

        if let Some(home) = dirs::home_dir() {
            let executable = Self::executable_in(&home.join("google-cloud-sdk"));
            if executable.is_file() {
                tracing::debug!(path = %executable.display(), "Using default Cloud SDK install");
                return Ok(Self::new(executable));
            }
        }

        Ok(Self::new(PathBuf::from(GCLOUD_EXECUTABLE)))
    }

    fn executable_in(sdk_home: &Path) -> PathBuf {
        sdk_home.join("bin").join(GCLOUD_EXECUTABLE)
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run gcloud and capture stdout.
    fn output(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = Command::new(&self.executable)
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {} {:?}", self.executable.display(), args))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("gcloud command failed {:?}: {}", args, stderr.trim());
        }
        String::from_utf8(output.stdout).context("gcloud output is not valid UTF-8")
    }

    /// Run gcloud with inherited stdio.
    fn run(&self, args: &[String]) -> anyhow::Result<()> {
        let status = Command::new(&self.executable)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run {}", self.executable.display()))?;
        if !status.success() {
            anyhow::bail!("gcloud {} exited with {}", args.join(" "), status);
        }
        Ok(())
    }
}
