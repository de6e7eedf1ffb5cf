//! sfe - bundler configuration generator for the Scalable Form Editor.
//!
//! Parses arguments, initializes logging, and hands the mode environment
//! variable to the commands. This is the only place the process environment
//! is consulted for the build mode.

use clap::Parser;
use miette::Result;
use sfe_cli::{cli, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let use_color = ui::init_colors(args.no_color);
    logger::init_logger(args.verbose, args.quiet, use_color);

    sfe_cli::run(args, |name| std::env::var(name).ok()).map_err(error::cli_error_to_miette)
}
