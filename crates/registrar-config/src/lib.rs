//! Configuration management for Registrar
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence)
//! 2. Environment variables (`REGISTRAR_<SECTION>__<KEY>`)
//! 3. registrar.local.toml (gitignored, local overrides)
//! 4. registrar.toml (git-tracked, project config)
//! 5. ~/.config/registrar/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::{LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, Paths};

/// Main Registrar configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    pub dispatch: DispatchConfig,
    pub store: StoreConfig,
    pub records: RecordsConfig,
}

/// Employee dispatch settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Salaries strictly below this hire a teacher.
    pub teacher_salary_threshold: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            teacher_salary_threshold: 500.0,
        }
    }
}

/// Row store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// First id handed out by the in-memory store.
    pub first_row_id: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { first_row_id: 1 }
    }
}

/// Record shape settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Whether teacher records may carry undeclared fields.
    pub allow_extra_fields: bool,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            allow_extra_fields: true,
        }
    }
}

impl RegistrarConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Create a strict configuration: teacher records reject unknown fields
    pub fn strict() -> Self {
        Self {
            records: RecordsConfig {
                allow_extra_fields: false,
            },
            ..Default::default()
        }
    }

    /// Check values the type system cannot rule out
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.dispatch.teacher_salary_threshold;
        if !threshold.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "dispatch.teacher_salary_threshold must be a finite number, got {threshold}"
            )));
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistrarConfig::default();
        assert!((config.dispatch.teacher_salary_threshold - 500.0).abs() < f64::EPSILON);
        assert_eq!(config.store.first_row_id, 1);
        assert!(config.records.allow_extra_fields);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = RegistrarConfig::strict();
        assert!(!config.records.allow_extra_fields);
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_non_finite_threshold_is_rejected() {
        let mut config = RegistrarConfig::default();
        config.dispatch.teacher_salary_threshold = f64::INFINITY;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("teacher_salary_threshold"));
    }

    #[test]
    fn test_toml_rendering_round_trips() {
        let mut config = RegistrarConfig::strict();
        config.store.first_row_id = 10;

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[dispatch]"));
        assert!(rendered.contains("first_row_id = 10"));

        let parsed: RegistrarConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let parsed: RegistrarConfig = toml::from_str("[store]\nfirst_row_id = 7\n").unwrap();
        assert_eq!(parsed.store.first_row_id, 7);
        assert_eq!(parsed.dispatch, DispatchConfig::default());
        assert_eq!(parsed.records, RecordsConfig::default());
    }
}
