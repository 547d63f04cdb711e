//! Configuration management commands.

use anyhow::{Context, Result, bail};
use registrar::RegistrarConfig;
use registrar_config::{PROJECT_CONFIG_FILE, Paths};
use std::path::Path;

use crate::style::colors::SemanticStyle;
use crate::style::{print_error, print_hint, print_info_table, print_success};

/// Show current configuration.
pub fn show(project: &str, format: &str) -> Result<()> {
    let project_path = Path::new(project);

    let config = RegistrarConfig::load_from_dir(project_path)
        .context("Failed to load configuration")?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        "toml" => {
            println!("{}", config.to_toml()?);
        }
        "text" => {
            println!("{}", "Registrar Configuration".header());
            println!();

            let threshold = config.dispatch.teacher_salary_threshold.to_string();
            let first_row_id = config.store.first_row_id.to_string();
            let allow_extra = config.records.allow_extra_fields.to_string();
            print_info_table(&[
                ("dispatch.teacher_salary_threshold", threshold.as_str()),
                ("store.first_row_id", first_row_id.as_str()),
                ("records.allow_extra_fields", allow_extra.as_str()),
            ]);

            if !Paths::project_config_file(project_path).exists() {
                print_hint(&format!(
                    "No {} in {}; showing defaults and overrides",
                    PROJECT_CONFIG_FILE.code(),
                    project_path.display()
                ));
            }
        }
        other => bail!("unknown format '{other}' (expected text, json or toml)"),
    }

    Ok(())
}

/// Validate configuration files.
pub fn validate(project: &str) -> Result<()> {
    let project_path = Path::new(project);

    match RegistrarConfig::load_from_dir(project_path) {
        Ok(_) => {
            print_success("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            print_error("Configuration validation failed");
            Err(e)
        }
    }
}
