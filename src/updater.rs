//! Update orchestration: fetch, synchronize, commit.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, Project};
use crate::git::{GitClient, GitError};
use crate::registry::{Registry, RegistryError};
use crate::sync;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Registry lookup for {package} failed: {source}")]
    Registry {
        package: String,
        source: RegistryError,
    },

    #[error("Could not rewrite version file {path}: {source}")]
    VersionFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Runs the update pipeline for each tracked project in declared order.
///
/// The pipeline per project is fetch -> rewrite version file -> commit (only
/// when the recorded version changed). Projects are processed strictly
/// sequentially and the first failure aborts the run, leaving later projects
/// unprocessed.
pub struct Updater {
    registry: Arc<dyn Registry>,
    git: GitClient,
    workdir: PathBuf,
}

impl Updater {
    pub fn new(registry: Arc<dyn Registry>, git: GitClient, workdir: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            git,
            workdir: workdir.into(),
        }
    }

    pub async fn run(&self, config: &Config) -> Result<(), UpdateError> {
        for project in &config.projects {
            self.update(project).await?;
        }

        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), UpdateError> {
        info!("Updating {}", project.name);

        let latest =
            self.registry
                .latest_version(&project.package)
                .await
                .map_err(|source| UpdateError::Registry {
                    package: project.package.clone(),
                    source,
                })?;

        // The fetch precedes any write, so a fetch failure leaves the file
        // untouched. The rewrite itself is unconditional.
        let version_path = self.workdir.join(&project.version_file);
        let outcome = sync::write_version_file(&version_path, &latest).map_err(|source| {
            UpdateError::VersionFile {
                path: version_path.clone(),
                source,
            }
        })?;

        info!("Current = {}, Latest = {}", outcome.previous, latest);

        if outcome.changed {
            let message = format!("Update {} to version '{}'", project.name, latest);
            info!("Committing changes to git: {}", message);

            // git runs in the working tree, so the relative path is staged
            self.git
                .stage_and_commit(&project.version_file, &message)
                .await?;
        }

        Ok(())
    }
}
