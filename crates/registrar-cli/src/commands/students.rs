//! Students command - list the sample class roster.

use anyhow::{Result, bail};
use registrar::{Registrar, Student, samples};
use tracing::debug;

use crate::style::print_table;

pub fn run(format: &str) -> Result<()> {
    let registrar = Registrar::in_memory();

    let students = samples::students()
        .iter()
        .map(|student| {
            let entries = student
                .to_record()
                .entries()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect::<Vec<_>>();
            registrar.build_student(entries)
        })
        .collect::<Result<Vec<Student>, _>>()?;

    debug!(count = students.len(), format, "listing students");

    match format {
        "json" => {
            let records: Vec<_> = students.iter().map(|s| s.to_record().to_json()).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        "table" => {
            let rows: Vec<Vec<String>> = students
                .iter()
                .map(|student| vec![student.first_name.clone(), student.location.clone()])
                .collect();
            print_table(&["First name", "Location"], &rows);
        }
        other => bail!("unknown format '{other}' (expected table or json)"),
    }

    Ok(())
}
