//! Deploy coordination: target resolution and deployable selection.

pub mod deployables;
pub mod error;
pub mod resolver;
pub mod target;

pub use deployables::{DeployableKind, collect_deployables, deployable_path};
pub use error::{DeployTargetError, TargetField, unresolvable_message};
pub use resolver::{
    DeployTargetResolver, FlexibleDeployTargetResolver, StandardDeployTargetResolver,
    gcloud_project, resolver_for,
};
pub use target::{APPENGINE_CONFIG, GCLOUD_CONFIG, TargetValue};
