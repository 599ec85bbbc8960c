//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Field Sync - query which fields propagate where across modules
#[derive(Parser, Debug)]
#[command(name = "fieldsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog file (.toml, .json, .yaml); defaults to the built-in catalog
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List modules and their fields
    List,

    /// Show what updating a field propagates to
    ///
    /// Prints the modules the field syncs to, the modules that carry the
    /// same field without a sync link, and the modules that lack the field.
    ///
    /// Examples:
    ///   fieldsync inspect edit-profile:display-name
    ///   fieldsync inspect notifications:language --json
    Inspect {
        /// Field to inspect, as moduleId:fieldId
        field: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file
    Check {
        /// Catalog file to validate (defaults to --catalog)
        path: Option<PathBuf>,
    },
}
