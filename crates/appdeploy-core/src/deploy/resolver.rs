//! Deploy target resolution for project id and version.
//!
//! Both environments share the same shape: a literal passes through, a
//! sentinel is resolved from the local gcloud configuration or the
//! appengine-web.xml descriptor, and an unset value fails with a message
//! listing every strategy that is legal for the environment.
//!
//! | Supplied            | Standard                   | Flexible              |
//! |---------------------|----------------------------|-----------------------|
//! | literal             | literal                    | literal               |
//! | `GCLOUD_CONFIG`     | project: gcloud (required) | project: gcloud as-is |
//! |                     | version: none              | version: none         |
//! | `APPENGINE_CONFIG`  | descriptor element         | error                 |
//! | unset               | error                      | error                 |

use std::path::PathBuf;

use crate::descriptor::AppEngineWebXml;
use crate::gcloud::SdkConfig;
use crate::types::Environment;

use super::error::{DeployTargetError, TargetField};
use super::target::TargetValue;

/// Resolves user-supplied deploy targets into concrete values.
///
/// `Ok(None)` means "let gcloud decide" and is distinct from failure.
pub trait DeployTargetResolver {
    fn project(&self, supplied: Option<&str>) -> Result<Option<String>, DeployTargetError>;

    fn version(&self, supplied: Option<&str>) -> Result<Option<String>, DeployTargetError>;
}

/// Pick the resolver variant for `environment`.
pub fn resolver_for<'a>(
    environment: Environment,
    descriptor: PathBuf,
    sdk: &'a dyn SdkConfig,
) -> Box<dyn DeployTargetResolver + 'a> {
    match environment {
        Environment::Standard => Box::new(StandardDeployTargetResolver::new(descriptor, sdk)),
        Environment::Flexible => Box::new(FlexibleDeployTargetResolver::new(sdk)),
    }
}

pub struct StandardDeployTargetResolver<'a> {
    descriptor: PathBuf,
    sdk: &'a dyn SdkConfig,
}

impl<'a> StandardDeployTargetResolver<'a> {
    pub fn new(descriptor: PathBuf, sdk: &'a dyn SdkConfig) -> Self {
        Self { descriptor, sdk }
    }

    fn read_descriptor(&self) -> Result<AppEngineWebXml, DeployTargetError> {
        Ok(AppEngineWebXml::read(&self.descriptor)?)
    }
}

impl DeployTargetResolver for StandardDeployTargetResolver<'_> {
    fn project(&self, supplied: Option<&str>) -> Result<Option<String>, DeployTargetError> {
        match TargetValue::parse(supplied) {
            Some(TargetValue::Literal(project)) => Ok(Some(project)),
            Some(TargetValue::GcloudConfig) => gcloud_project(self.sdk).map(Some),
            Some(TargetValue::AppEngineConfig) => {
                let application = self.read_descriptor()?.application.ok_or_else(|| {
                    DeployTargetError::DescriptorElementMissing {
                        element: "application",
                        path: self.descriptor.clone(),
                    }
                })?;
                tracing::debug!(project = %application, "Project id read from appengine-web.xml");
                Ok(Some(application))
            }
            None => Err(DeployTargetError::unresolvable(
                TargetField::ProjectId,
                Environment::Standard,
            )),
        }
    }

    fn version(&self, supplied: Option<&str>) -> Result<Option<String>, DeployTargetError> {
        match TargetValue::parse(supplied) {
            Some(TargetValue::Literal(version)) => Ok(Some(version)),
            Some(TargetValue::GcloudConfig) => Ok(None),
            Some(TargetValue::AppEngineConfig) => {
                let version = self.read_descriptor()?.version.ok_or_else(|| {
                    DeployTargetError::DescriptorElementMissing {
                        element: "version",
                        path: self.descriptor.clone(),
                    }
                })?;
                tracing::debug!(version = %version, "Version read from appengine-web.xml");
                Ok(Some(version))
            }
            None => Err(DeployTargetError::unresolvable(
                TargetField::Version,
                Environment::Standard,
            )),
        }
    }
}

pub struct FlexibleDeployTargetResolver<'a> {
    sdk: &'a dyn SdkConfig,
}

impl<'a> FlexibleDeployTargetResolver<'a> {
    pub fn new(sdk: &'a dyn SdkConfig) -> Self {
        Self { sdk }
    }
}

impl DeployTargetResolver for FlexibleDeployTargetResolver<'_> {
    fn project(&self, supplied: Option<&str>) -> Result<Option<String>, DeployTargetError> {
        match TargetValue::parse(supplied) {
            Some(TargetValue::Literal(project)) => Ok(Some(project)),
            Some(TargetValue::GcloudConfig) => {
                let project = self.sdk.project()?;
                if project.is_none() {
                    tracing::warn!("No project set in gcloud config; gcloud will pick its default");
                }
                Ok(project)
            }
            Some(TargetValue::AppEngineConfig) | None => Err(DeployTargetError::unresolvable(
                TargetField::ProjectId,
                Environment::Flexible,
            )),
        }
    }

    fn version(&self, supplied: Option<&str>) -> Result<Option<String>, DeployTargetError> {
        match TargetValue::parse(supplied) {
            Some(TargetValue::Literal(version)) => Ok(Some(version)),
            Some(TargetValue::GcloudConfig) => Ok(None),
            Some(TargetValue::AppEngineConfig) | None => Err(DeployTargetError::unresolvable(
                TargetField::Version,
                Environment::Flexible,
            )),
        }
    }
}

/// Project from gcloud config; absence is fatal.
pub fn gcloud_project(sdk: &dyn SdkConfig) -> Result<String, DeployTargetError> {
    let project = sdk
        .project()?
        .filter(|project| !project.trim().is_empty())
        .ok_or(DeployTargetError::GcloudProjectMissing)?;
    tracing::debug!(project = %project, "Project id read from gcloud config");
    Ok(project)
}
