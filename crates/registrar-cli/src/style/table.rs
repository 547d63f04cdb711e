//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use super::colors::SemanticStyle;

fn styled_table() -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table
}

/// Creates a table with a bold header row.
pub fn listing_table(columns: &[&str], rows: &[Vec<String>]) -> Table {
    let mut table = styled_table();

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Prints rows as a formatted table with a count footer.
pub fn print_table(columns: &[&str], rows: &[Vec<String>]) {
    let table = listing_table(columns, rows);
    println!("{table}");

    let count = rows.len();
    let row_word = if count == 1 { "row" } else { "rows" };
    println!("{}", format!("({count} {row_word})").muted());
}

/// Creates a key-value info table (two columns: key and value).
pub fn info_table(entries: &[(&str, &str)]) -> Table {
    let mut table = styled_table();

    for (key, value) in entries {
        let key_cell = if super::no_color() {
            Cell::new(key)
        } else {
            Cell::new(key).fg(Color::DarkGrey)
        };
        table.add_row(vec![key_cell, Cell::new(value)]);
    }

    table
}

/// Prints a key-value info table.
pub fn print_info_table(entries: &[(&str, &str)]) {
    let table = info_table(entries);
    println!("{table}");
}
