//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Rosterline - normalize personnel and timecard exports
#[derive(Parser, Debug)]
#[command(name = "rosterline")]
#[command(author, version, about = "Normalize personnel and timecard JSON exports", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract timeline assignments from employee records
    Assignments {
        /// JSON file with an array of employee records ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Sort by start date
        #[arg(long)]
        sorted: bool,

        /// Group into one lane per employee
        #[arg(long)]
        lanes: bool,
    },

    /// Resolve a project key for each timecard row
    ProjectKeys {
        /// JSON file with a timecard row or an array of rows ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Emit hour totals per project key instead of per-row keys
        #[arg(long)]
        summary: bool,
    },

    /// Format one or more raw phone strings
    Phone {
        /// Raw phone text, one argument per field
        #[arg(required = true)]
        raw: Vec<String>,
    },

    /// Format the phone lines of each employee record
    Contacts {
        /// JSON file with an array of employee records ("-" for stdin)
        #[arg(short, long)]
        input: String,
    },

    /// Configuration management
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Print one value by dotted key (e.g. `output.pretty`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Where to write; defaults to the platform config directory
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
