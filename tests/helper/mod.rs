//! Test infrastructure for version-updater integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub fn run_git(repo: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .expect("failed to run git");

    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A temporary git repository holding tracked version files.
/// Automatically cleaned up when dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestRepo {
    /// Creates a repository with an initial commit.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_path_buf();

        run_git(&path, &["init", "-b", "master"]);
        run_git(&path, &["config", "user.email", "test@example.com"]);
        run_git(&path, &["config", "user.name", "Test User"]);

        std::fs::write(path.join("README.md"), "# Test Repo\n").unwrap();
        run_git(&path, &["add", "README.md"]);
        run_git(&path, &["commit", "-m", "Initial commit"]);

        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Writes and commits a version file at `relative_path`.
    pub fn add_version_file(&self, relative_path: &str, contents: &str) {
        let path = self.path.join(relative_path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();

        run_git(&self.path, &["add", relative_path]);
        run_git(
            &self.path,
            &["commit", "-m", &format!("Track {}", relative_path)],
        );
    }

    pub fn commit_count(&self) -> usize {
        run_git(&self.path, &["rev-list", "--count", "HEAD"])
            .parse()
            .unwrap()
    }

    pub fn last_commit_message(&self) -> String {
        run_git(&self.path, &["log", "-1", "--format=%s"])
    }

    pub fn read(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.path.join(relative_path)).unwrap()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
