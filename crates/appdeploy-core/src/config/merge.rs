//! Configuration layer merging logic
//!
//! Two layers: appengine.toml, then command-line overrides. A value set in a
//! later layer replaces the earlier one; unset values leave it untouched.

use std::path::PathBuf;

use super::schema::AppEngineConfig;
use crate::types::Environment;

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub environment: Option<Environment>,
    pub project_id: Option<String>,
    pub version: Option<String>,
    pub appengine_directory: Option<PathBuf>,
    pub staging_directory: Option<PathBuf>,
    pub cloud_sdk_home: Option<PathBuf>,
    pub promote: Option<bool>,
    pub stop_previous_version: Option<bool>,
}

/// Apply `overrides` on top of `base`.
pub fn merge_overrides(mut base: AppEngineConfig, overrides: ConfigOverrides) -> AppEngineConfig {
    if let Some(environment) = overrides.environment {
        base.environment = environment;
    }
    merge_option(&mut base.deploy.project_id, overrides.project_id);
    merge_option(&mut base.deploy.version, overrides.version);
    merge_option(
        &mut base.deploy.appengine_directory,
        overrides.appengine_directory,
    );
    merge_option(&mut base.deploy.promote, overrides.promote);
    merge_option(
        &mut base.deploy.stop_previous_version,
        overrides.stop_previous_version,
    );
    merge_option(
        &mut base.stage.staging_directory,
        overrides.staging_directory,
    );
    merge_option(&mut base.tools.cloud_sdk_home, overrides.cloud_sdk_home);
    base
}

fn merge_option<T>(base: &mut Option<T>, layer: Option<T>) {
    if layer.is_some() {
        *base = layer;
    }
}
