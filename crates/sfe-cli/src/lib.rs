//! sfe CLI - bundler configuration generator for the Scalable Form Editor.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `print`, `write` and `check` implementations
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines on stderr
//!
//! The build mode is looked up in the environment exactly once, by the
//! closure handed to [`run`]; commands receive the value, never the
//! environment.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

use sfe_config::ConfigDiscovery;

pub use error::{CliError, Result, ResultExt};

/// Load settings, look up the mode variable once, and run the command.
///
/// `lookup_env` receives the name of the mode variable (`NODE_ENV` unless
/// configured otherwise).
pub fn run<F>(args: cli::Cli, lookup_env: F) -> Result<()>
where
    F: FnOnce(&str) -> Option<String>,
{
    let settings = ConfigDiscovery::new(&args.root).load()?;
    let env_mode = lookup_env(&settings.mode_env);
    tracing::debug!(variable = %settings.mode_env, value = ?env_mode, "read build mode");

    let ctx = commands::Context { settings, env_mode };

    match args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args, &ctx),
        cli::Command::Write(write_args) => commands::write_execute(write_args, &ctx),
        cli::Command::Check(check_args) => commands::check_execute(check_args, &ctx),
    }
}
