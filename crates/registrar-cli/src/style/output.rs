//! Status lines for command output.

use super::colors::SemanticStyle;

/// Leading marker of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Success,
    Error,
    Warning,
    Hint,
}

impl Marker {
    fn symbol(self) -> String {
        match self {
            Marker::Success => "✓".success(),
            Marker::Error => "✗".error(),
            Marker::Warning => "⚠".warning(),
            Marker::Hint => "→".muted(),
        }
    }
}

/// Renders a message behind its marker. Hints are dimmed as a whole.
pub fn status_line(marker: Marker, msg: &str) -> String {
    let body = if marker == Marker::Hint {
        msg.muted()
    } else {
        msg.to_string()
    };
    format!("{} {body}", marker.symbol())
}

pub fn print_success(msg: &str) {
    println!("{}", status_line(Marker::Success, msg));
}

/// Errors go to stderr next to the anyhow report.
pub fn print_error(msg: &str) {
    eprintln!("{}", status_line(Marker::Error, msg));
}

/// Warnings stay on stdout so they read in line with listings.
pub fn print_warn(msg: &str) {
    println!("{}", status_line(Marker::Warning, msg));
}

pub fn print_hint(msg: &str) {
    println!("{}", status_line(Marker::Hint, msg));
}

/// Prints an indented `key: value` pair.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {value}", key.muted());
}

pub fn print_spacer() {
    println!();
}
