use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::Format;

/// Available sfe subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the bundler configuration to stdout
    ///
    /// Renders the configuration for the resolved build mode, either as a
    /// JSON record or as the CommonJS module the bundler loads.
    Print(PrintArgs),

    /// Write the bundler configuration file
    ///
    /// Writes webpack.config.js (or the configured output file) into the
    /// project directory. Refuses to overwrite unless --force is given.
    Write(WriteArgs),

    /// Validate the configuration against the project layout
    ///
    /// Checks that the entry module and every rule include directory exist.
    Check(CheckArgs),
}

/// Build mode selection shared by all subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Build mode (defaults to the value of NODE_ENV)
    ///
    /// Anything other than "production" means development unless --strict
    /// is given.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Reject unrecognized build modes instead of falling back to development
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Output format (defaults to the `format` setting)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}

/// Arguments for the write command
#[derive(Args, Debug)]
pub struct WriteArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Output format (defaults to the `format` setting)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Output file (defaults to the `output_file` setting)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    /// Check both development and production configurations
    #[arg(long, conflicts_with = "mode")]
    pub all_modes: bool,
}
