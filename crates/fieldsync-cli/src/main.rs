//! Field Sync CLI
//!
//! The command-line interface over the field-sync query engine.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.catalog),
        None => {
            // No command provided - show help hint
            println!("{} Field Sync CLI", "fieldsync".green().bold());
            println!();
            println!("Run {} for available commands.", "fieldsync --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, catalog: Option<PathBuf>) -> Result<()> {
    match cmd {
        Commands::List => commands::run_list(catalog.as_deref()),
        Commands::Inspect { field, json } => {
            commands::run_inspect(catalog.as_deref(), &field, json)
        }
        Commands::Check { path } => {
            let path = path.or(catalog).ok_or_else(|| {
                error::CliError::user("check needs a catalog path (argument or --catalog)")
            })?;
            commands::run_check(&path)
        }
    }
}
