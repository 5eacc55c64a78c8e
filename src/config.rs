use std::path::PathBuf;

/// A single upstream package whose version is tracked in the working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Display name used in log and commit messages
    pub name: String,
    /// Path of the version-marker file, relative to the working tree root
    pub version_file: PathBuf,
    /// Package identifier used to query the registry
    pub package: String,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        version_file: impl Into<PathBuf>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version_file: version_file.into(),
            package: package.into(),
        }
    }
}

/// The set of tracked projects for one run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub projects: Vec<Project>,
}

impl Config {
    /// The production project list. New tracked projects are added here at
    /// edit time; there is no runtime configuration.
    pub fn builtin() -> Self {
        Self {
            projects: vec![Project::new(
                "MeshCentral",
                "meshcentral/VERSION",
                "meshcentral",
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_tracks_at_least_one_project() {
        let config = Config::builtin();
        assert!(!config.projects.is_empty());
    }

    #[test]
    fn builtin_projects_have_complete_fields() {
        for project in Config::builtin().projects {
            assert!(!project.name.is_empty());
            assert!(!project.package.is_empty());
            assert!(project.version_file.file_name().is_some());
        }
    }
}
