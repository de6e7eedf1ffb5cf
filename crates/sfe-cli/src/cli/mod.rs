//! Command-line interface definition for sfe.
//!
//! # Command Structure
//!
//! - `sfe print` - Print the bundler configuration for a mode
//! - `sfe write` - Write the configuration file the bundler loads
//! - `sfe check` - Validate the configuration against the project layout

mod commands;
pub mod enums;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{CheckArgs, Command, ModeArgs, PrintArgs, WriteArgs};
pub use enums::*;

/// sfe - bundler configuration for the Scalable Form Editor
#[derive(Parser, Debug)]
#[command(
    name = "sfe",
    version,
    about = "Generate the Scalable Form Editor bundler configuration",
    long_about = "Derives the bundler configuration for the Scalable Form Editor library\n\
                  from the build mode (NODE_ENV by default), renders it as JSON or as a\n\
                  CommonJS config module, and validates it against the project layout."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project directory (where sfe.toml is looked up)
    #[arg(short = 'C', long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
