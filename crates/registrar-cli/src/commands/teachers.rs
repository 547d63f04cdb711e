//! Teachers command - list the sample teacher directory.

use anyhow::{Result, bail};
use registrar::{Registrar, RegistrarConfig, Teacher, Value, samples};
use tracing::debug;

use crate::style::colors::SemanticStyle;
use crate::style::{print_table, print_warn};

pub fn run(config: RegistrarConfig, format: &str) -> Result<()> {
    debug!(
        allow_extra_fields = config.records.allow_extra_fields,
        "listing teachers"
    );
    let registrar = Registrar::in_memory_with_config(config)?;

    // Re-check every sample against the configured shape.
    let mut teachers = Vec::new();
    for teacher in samples::teachers()? {
        let entries = teacher
            .to_record()
            .entries()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect::<Vec<_>>();

        match registrar.build_teacher(entries) {
            Ok(teacher) => teachers.push(teacher),
            Err(e) => print_warn(&format!("Skipping {}: {e}", teacher.display_name())),
        }
    }

    match format {
        "json" => {
            let records: Vec<_> = teachers.iter().map(|t| t.to_record().to_json()).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        "table" => {
            let columns = ["Name", "Location", "Full time", "Experience", "Extra"];
            let rows: Vec<Vec<String>> = teachers.iter().map(teacher_row).collect();
            print_table(&columns, &rows);
        }
        other => bail!("unknown format '{other}' (expected table or json)"),
    }

    if teachers.is_empty() {
        println!("{}", "No teachers fit the configured shape.".muted());
    }

    Ok(())
}

fn teacher_row(teacher: &Teacher) -> Vec<String> {
    let extra = teacher
        .extra_fields()
        .map(|(name, value)| format!("{name}={}", display_value(value)))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        teacher.display_name(),
        teacher.location.clone(),
        if teacher.full_time_employee { "yes" } else { "no" }.to_string(),
        teacher
            .years_of_experience
            .map_or_else(|| "-".to_string(), |years| years.to_string()),
        extra,
    ]
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        other => other.to_string(),
    }
}
