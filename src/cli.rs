//! Command-line interface definitions.
//!
//! Lives in the library so completions and tests can build the command
//! without running the binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Extract and normalize drill diagrams from LLM chat output.
#[derive(Debug, Parser)]
#[command(name = "drillcraft", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to $DRILLCRAFT_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract drills from message text (reads stdin when no file is given)
    Extract {
        /// Message files; several are processed in parallel
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Print only the drills array
        #[arg(long)]
        drills_only: bool,
    },

    /// Normalize a raw drill JSON document
    Normalize {
        /// JSON file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Repair trailing commas and line comments in almost-JSON
    Sanitize {
        /// Input file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
}
