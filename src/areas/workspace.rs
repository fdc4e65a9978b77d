use crate::artifacts::project::target::ProjectFile;
use anyhow::Context;
use std::path::{Path, PathBuf};

const PROJECT_FILE: &str = "project.json";

/// Locates and reads project files on disk
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a user-supplied path relative to the workspace.
    ///
    /// A directory stands for the `project.json` inside it, as found in an
    /// unpacked project.
    pub fn resolve(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };

        if !path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", path);
        }

        if path.is_dir() {
            let project = path.join(PROJECT_FILE);
            if !project.is_file() {
                anyhow::bail!("No {PROJECT_FILE} in directory: {:?}", path);
            }
            Ok(project)
        } else {
            Ok(path)
        }
    }

    pub fn read_file(&self, path: &Path) -> anyhow::Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
    }

    pub fn load_project(&self, path: &Path) -> anyhow::Result<ProjectFile> {
        let path = self.resolve(path)?;
        let json = self.read_file(&path)?;

        let project = ProjectFile::from_json(&json)
            .with_context(|| format!("Failed to parse project {:?}", path))?;
        tracing::debug!(path = %path.display(), targets = project.targets.len(), "loaded project");

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    const PROJECT: &str = r#"{ "targets": [{ "name": "Stage", "isStage": true, "blocks": {} }] }"#;

    #[test]
    fn loads_project_from_directory() {
        let dir = TempDir::new().unwrap();
        dir.child("game").child(PROJECT_FILE).write_str(PROJECT).unwrap();
        let workspace = Workspace::new(dir.path().into());

        let project = workspace.load_project(Path::new("game")).unwrap();

        assert_eq!(project.targets.len(), 1);
    }

    #[test]
    fn loads_project_from_file() {
        let dir = TempDir::new().unwrap();
        dir.child("old.json").write_str(PROJECT).unwrap();
        let workspace = Workspace::new(dir.path().into());

        assert!(workspace.load_project(Path::new("old.json")).is_ok());
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().into());

        let err = workspace.load_project(Path::new("nowhere.json")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn directory_without_project_is_an_error() {
        let dir = TempDir::new().unwrap();
        dir.child("empty").create_dir_all().unwrap();
        let workspace = Workspace::new(dir.path().into());

        assert!(workspace.load_project(Path::new("empty")).is_err());
    }

    #[test]
    fn malformed_project_reports_path() {
        let dir = TempDir::new().unwrap();
        dir.child("broken.json").write_str("{}").unwrap();
        let workspace = Workspace::new(dir.path().into());

        let err = workspace.load_project(Path::new("broken.json")).unwrap_err();
        assert!(format!("{err:#}").contains("no `targets` array"));
    }
}
