//! Registrar command-line interface.
//!
//! Walks through the typed records, staff dispatch and credit summation
//! provided by the `registrar` crate.
//!
//! # Quick Start
//!
//! ```bash
//! # Who gets hired for a given salary?
//! registrar employee 200 1000 '$500'
//!
//! # Is a Java teacher available?
//! registrar subject java --first-name Anna --last-name Davis --experience 7
//!
//! # Sum credits of one brand
//! registrar credits --major 4 3
//!
//! # Who is in class?
//! registrar students
//! ```

mod commands;
mod style;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use registrar::{ConfigLoader, RegistrarConfig};
use tracing_subscriber::EnvFilter;

/// Registrar - typed staff and student records.
#[derive(Parser)]
#[command(name = "registrar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project directory holding registrar.toml.
    #[arg(short, long, global = true, default_value = ".")]
    project: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Pick an employee for each salary.
    #[command(allow_negative_numbers = true)]
    Employee {
        /// Salaries; numbers are amounts, anything else is a label.
        #[arg(required = true)]
        salaries: Vec<String>,
    },

    /// Check teacher availability for a subject.
    Subject {
        /// Subject (cpp, react, java).
        subject: String,

        /// Teacher's first name.
        #[arg(long)]
        first_name: String,

        /// Teacher's last name.
        #[arg(long)]
        last_name: String,

        /// Years of experience teaching this subject.
        #[arg(short, long, allow_negative_numbers = true)]
        experience: Option<i64>,
    },

    /// Sum credits of a single brand.
    Credits {
        /// Major credits to sum.
        #[arg(long, num_args = 1..)]
        major: Vec<u32>,

        /// Minor credits to sum.
        #[arg(long, num_args = 1..)]
        minor: Vec<u32>,
    },

    /// Insert, update and delete a sample row.
    Rows,

    /// List the sample class roster.
    Students {
        /// Output format (table, json).
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List the sample teacher directory.
    Teachers {
        /// Output format (table, json).
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check that the configuration loads.
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    style::set_no_color(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Employee { salaries } => {
            commands::employee::run(&load_config(&cli.project)?, &salaries)
        }
        Commands::Subject {
            subject,
            first_name,
            last_name,
            experience,
        } => commands::subject::run(&subject, &first_name, &last_name, experience),
        Commands::Credits { major, minor } => commands::credits::run(&major, &minor),
        Commands::Rows => commands::rows::run(load_config(&cli.project)?),
        Commands::Students { format } => commands::students::run(&format),
        Commands::Teachers { format } => {
            commands::teachers::run(load_config(&cli.project)?, &format)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(&cli.project, &format),
            ConfigCommands::Validate => commands::config::validate(&cli.project),
        },
    }
}

fn load_config(project: &str) -> Result<RegistrarConfig> {
    ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .with_context(|| format!("Failed to load configuration for {project}"))
}
