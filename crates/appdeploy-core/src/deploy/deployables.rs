//! Selection of the descriptor files handed to `gcloud app deploy`.

use std::fmt;
use std::path::{Path, PathBuf};

/// A well-known deployable descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeployableKind {
    App,
    Cron,
    Dispatch,
    Dos,
    Index,
    Queue,
}

impl DeployableKind {
    /// Every kind, in deploy order.
    pub const ALL: [DeployableKind; 6] = [
        DeployableKind::App,
        DeployableKind::Cron,
        DeployableKind::Dispatch,
        DeployableKind::Dos,
        DeployableKind::Index,
        DeployableKind::Queue,
    ];

    /// The five descriptors that may live outside the staging directory.
    pub fn auxiliary() -> impl Iterator<Item = DeployableKind> {
        Self::ALL.into_iter().filter(|kind| *kind != DeployableKind::App)
    }

    pub fn file_name(self) -> &'static str {
        match self {
            DeployableKind::App => "app.yaml",
            DeployableKind::Cron => "cron.yaml",
            DeployableKind::Dispatch => "dispatch.yaml",
            DeployableKind::Dos => "dos.yaml",
            DeployableKind::Index => "index.yaml",
            DeployableKind::Queue => "queue.yaml",
        }
    }

}

impl fmt::Display for DeployableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Where `kind` is expected to live.
///
/// `app.yaml` is generated by staging and always comes from the staging
/// directory. The other descriptors come from the override directory when one
/// is configured, otherwise from staging.
pub fn deployable_path(
    kind: DeployableKind,
    staging_dir: &Path,
    override_dir: Option<&Path>,
) -> PathBuf {
    let dir = match kind {
        DeployableKind::App => staging_dir,
        _ => override_dir.unwrap_or(staging_dir),
    };
    dir.join(kind.file_name())
}

/// Collect the descriptors that exist at their resolved location.
///
/// Only the exact resolved path of each well-known name is checked; other
/// files and other directories are never considered.
pub fn collect_deployables(staging_dir: &Path, override_dir: Option<&Path>) -> Vec<PathBuf> {
    DeployableKind::ALL
        .into_iter()
        .map(|kind| deployable_path(kind, staging_dir, override_dir))
        .filter(|path| {
            let present = path.is_file();
            if !present {
                tracing::debug!(path = %path.display(), "Deployable not present, skipping");
            }
            present
        })
        .collect()
}
