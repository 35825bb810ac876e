//! appdeploy Core Library
//!
//! Provides the domain logic for deploying App Engine applications:
//! deploy target resolution, deployable descriptor selection, project
//! configuration and the gcloud invocation.

pub mod commands;
pub mod config;
pub mod context;
pub mod deploy;
pub mod descriptor;
pub mod gcloud;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{AppEngineConfig, ConfigOverrides, ConfigStore};
    pub use crate::context::DeployContext;

    // Deploy
    pub use crate::deploy::{
        APPENGINE_CONFIG, DeployTargetError, DeployTargetResolver, DeployableKind,
        FlexibleDeployTargetResolver, GCLOUD_CONFIG, StandardDeployTargetResolver, TargetValue,
        collect_deployables,
    };

    // Commands
    pub use crate::commands::{DeployCommand, DeployOptions, DeployPlan, DeployTarget};

    // gcloud
    pub use crate::gcloud::{DeployRequest, DeployRunner, Gcloud, SdkConfig};

    pub use crate::types::Environment;
}
