//! Configuration file locations.
//!
//! Project files live next to each other in the project directory; the user
//! file lives in the platform config directory (`~/.config/registrar/` on
//! Linux).

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Checked-in project configuration.
pub const PROJECT_CONFIG_FILE: &str = "registrar.toml";

/// Machine-local overrides, kept out of version control.
pub const LOCAL_CONFIG_FILE: &str = "registrar.local.toml";

const USER_CONFIG_FILE: &str = "config.toml";

/// Resolves where each configuration layer is read from.
pub struct Paths {
    project_dirs: Option<ProjectDirs>,
}

impl Paths {
    pub fn new() -> Self {
        Self {
            project_dirs: ProjectDirs::from("com", "Registrar", "registrar"),
        }
    }

    /// The per-user configuration file.
    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        self.project_dirs
            .as_ref()
            .map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE))
            .ok_or_else(|| ConfigError::XdgError("no home directory for user config".to_string()))
    }

    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(PROJECT_CONFIG_FILE)
    }

    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(LOCAL_CONFIG_FILE)
    }

    /// Project-level files in the order they are layered; later files win.
    pub fn project_files(project_dir: impl AsRef<Path>) -> [PathBuf; 2] {
        let dir = project_dir.as_ref();
        [Self::project_config_file(dir), Self::local_config_file(dir)]
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_user_config_file_is_namespaced() {
        if let Ok(file) = Paths::new().user_config_file() {
            assert!(file.to_string_lossy().contains("registrar"));
            assert!(file.ends_with(USER_CONFIG_FILE));
        }
    }

    #[test]
    fn test_project_files_local_last() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        assert_eq!(
            Paths::project_files(project_dir),
            [
                project_dir.join("registrar.toml"),
                project_dir.join("registrar.local.toml"),
            ]
        );
    }
}
