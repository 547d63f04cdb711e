//! Rows command - CRUD walkthrough against the in-memory row store.

use anyhow::Result;
use registrar::{Registrar, RegistrarConfig, samples};
use tracing::debug;

use crate::style::colors::SemanticStyle;
use crate::style::{print_labeled, print_success};

pub fn run(config: RegistrarConfig) -> Result<()> {
    debug!(first_row_id = config.store.first_row_id, "starting row walkthrough");
    let registrar = Registrar::in_memory_with_config(config)?;
    let (row, updated) = samples::row();

    let id = registrar.insert_row(&row)?;
    print_success(&format!("Inserted row {}", id.to_string().code()));
    print_labeled("Name", &format!("{} {}", row.first_name, row.last_name));

    let id = registrar.update_row(id, &updated)?;
    print_success(&format!("Updated row {}", id.to_string().code()));
    if let Some(age) = updated.age {
        print_labeled("Age", &age.to_string());
    }

    registrar.delete_row(id)?;
    print_success(&format!("Deleted row {}", id.to_string().code()));

    Ok(())
}
