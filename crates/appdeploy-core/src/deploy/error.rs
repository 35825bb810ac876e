//! Errors raised while resolving deploy targets.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Environment;

use super::target::{APPENGINE_CONFIG, GCLOUD_CONFIG};

#[derive(Debug, Error)]
pub enum DeployTargetError {
    /// No value was supplied, or the supplied sentinel is illegal here.
    #[error("{message}")]
    Unresolvable { message: String },

    #[error("Project was not found in gcloud config")]
    GcloudProjectMissing,

    #[error("{} does not contain a <{element}> element", path.display())]
    DescriptorElementMissing {
        element: &'static str,
        path: PathBuf,
    },

    #[error(transparent)]
    Sdk(#[from] anyhow::Error),
}

/// Which target identifier failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    ProjectId,
    Version,
}

impl DeployTargetError {
    pub fn unresolvable(field: TargetField, environment: Environment) -> Self {
        DeployTargetError::Unresolvable {
            message: unresolvable_message(field, environment),
        }
    }

    pub fn is_unresolvable(&self) -> bool {
        matches!(self, DeployTargetError::Unresolvable { .. })
    }
}

/// Enumerate every strategy that can set `field` under `environment`.
pub fn unresolvable_message(field: TargetField, environment: Environment) -> String {
    let (name, example, gcloud_hint, element) = match field {
        TargetField::ProjectId => (
            "projectId",
            "my-project-id",
            "to use project from gcloud config.",
            "application",
        ),
        TargetField::Version => (
            "version",
            "my-version",
            "to have gcloud generate a version for you.",
            "version",
        ),
    };

    let descriptor_option = match environment {
        Environment::Standard => format!(
            "Set appengine.deploy.{name} = '{APPENGINE_CONFIG}' to use <{element}> from appengine-web.xml"
        ),
        Environment::Flexible => {
            format!("Using {APPENGINE_CONFIG} is not allowed for flexible environment projects")
        }
    };

    format!(
        "Deployment {name} must be defined or configured to read from system state\n\
         1. Set appengine.deploy.{name} = '{example}'\n\
         2. Set appengine.deploy.{name} = '{GCLOUD_CONFIG}' {gcloud_hint}\n\
         3. {descriptor_option}"
    )
}
