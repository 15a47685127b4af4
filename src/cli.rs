//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::content::Route;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio portfolio content registry CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content file name (default: content.toml)
    #[arg(short = 'C', long, default_value = "content.toml")]
    pub content: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load the content file and validate it against the schema rules
    Check,

    /// Print the JSON payload consumed by page templates
    Dump {
        /// Route to dump; the whole site payload when omitted
        #[arg(value_enum)]
        route: Option<Route>,
    },
}
