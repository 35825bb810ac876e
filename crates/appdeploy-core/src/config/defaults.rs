//! Default locations and path resolution helpers.

use std::path::{Path, PathBuf};

use crate::descriptor::DEFAULT_DESCRIPTOR_PATH;
use crate::types::Environment;

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = "appengine.toml";

/// Staging output, relative to the project root.
pub const DEFAULT_STAGING_DIR: &str = "build/staged-app";

/// Generated descriptors inside a staged standard app.
pub const STANDARD_GENERATED_DIR: &str = "WEB-INF/appengine-generated";

/// Hand-written descriptors of a flexible app, relative to the project root.
pub const FLEXIBLE_APPENGINE_DIR: &str = "src/main/appengine";

pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Resolve a configured path against the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

pub fn staging_directory(project_root: &Path, configured: Option<&Path>) -> PathBuf {
    resolve_path(
        project_root,
        configured.unwrap_or_else(|| Path::new(DEFAULT_STAGING_DIR)),
    )
}

pub fn descriptor_path(project_root: &Path, configured: Option<&Path>) -> PathBuf {
    resolve_path(
        project_root,
        configured.unwrap_or_else(|| Path::new(DEFAULT_DESCRIPTOR_PATH)),
    )
}

/// Directory for the auxiliary descriptors when none is configured.
pub fn appengine_directory(
    environment: Environment,
    project_root: &Path,
    staging_dir: &Path,
    configured: Option<&Path>,
) -> PathBuf {
    if let Some(path) = configured {
        return resolve_path(project_root, path);
    }
    match environment {
        Environment::Standard => staging_dir.join(STANDARD_GENERATED_DIR),
        Environment::Flexible => project_root.join(FLEXIBLE_APPENGINE_DIR),
    }
}
