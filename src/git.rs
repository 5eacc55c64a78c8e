//! Git command wrappers.
//!
//! Thin wrapper around the git CLI for staging and committing a single file.
//! Exit status is checked: a failed invocation becomes an error instead of
//! being silently discarded.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("git {args} failed: {stderr}")]
    Command { args: String, stderr: String },
}

/// Runs git commands against a fixed working tree.
pub struct GitClient {
    program: String,
    workdir: PathBuf,
}

impl GitClient {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_program("git", workdir)
    }

    /// Uses a custom executable in place of `git`.
    pub fn with_program(program: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    /// Stages `path` and commits it with `message`, as two sequential
    /// invocations.
    pub async fn stage_and_commit(&self, path: &Path, message: &str) -> Result<(), GitError> {
        self.run(&["add", &path.to_string_lossy()]).await?;
        self.run(&["commit", "-m", message]).await
    }

    async fn run(&self, args: &[&str]) -> Result<(), GitError> {
        info!("Executing {} {}", self.program, args.join(" "));

        let output = tokio::process::Command::new(&self.program)
            .current_dir(&self.workdir)
            .args(args)
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(GitError::Command {
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
