//! Configuration loader with multi-source merging

use crate::{Paths, RegistrarConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "REGISTRAR".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "REGISTRAR")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/registrar/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<RegistrarConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = RegistrarConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/registrar/config.toml)
        if self.include_user_config {
            let paths = Paths::new();
            if let Ok(user_config_file) = paths.user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (registrar.toml), then local overrides (registrar.local.toml)
        for file in Paths::project_files(&self.project_dir) {
            if file.exists() {
                builder = builder.add_source(
                    config::File::from(file)
                        .required(false)
                        .format(config::FileFormat::Toml),
                );
            }
        }

        // 4. Environment variables (REGISTRAR_DISPATCH__TEACHER_SALARY_THRESHOLD)
        // Keys contain underscores, so sections are split on a double underscore.
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Build and deserialize
        let config = builder.build().context("Failed to build configuration")?;

        let registrar_config: RegistrarConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        registrar_config.validate()?;

        Ok(registrar_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> RegistrarConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
