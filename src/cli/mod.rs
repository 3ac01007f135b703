//! CLI argument parsing.
//!
//! Uses clap derive macros for declarative argument definitions. Parse failures
//! (unknown flags, missing values) are reported by clap, which exits with a usage
//! message and a non-zero status.

use crate::meta;
use clap::Parser;
use std::path::PathBuf;

/// {{DESCRIPTION}}
#[derive(Parser, Debug, Clone)]
#[command(name = meta::SCRIPT_NAME)]
#[command(author = meta::AUTHOR, version, about = meta::DESCRIPTION, long_about = None)]
#[command(after_help = meta::USAGE_EXAMPLE)]
pub struct Cli {
    /// Enable verbose output (debug logging and error traces).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would be done without making changes.
    #[arg(long)]
    pub dry_run: bool,

    /// Path to the JSON configuration file.
    #[arg(long, value_name = "PATH", default_value_os_t = meta::default_config_path())]
    pub config: PathBuf,
    // Add your custom arguments here, e.g.:
    //
    // /// Input file to process.
    // pub input_file: PathBuf,
    //
    // /// Output file path.
    // #[arg(short, long)]
    // pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
