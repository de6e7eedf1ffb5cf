//! Write command implementation.
//!
//! Renders the configuration and writes it where the bundler expects it.

use std::fs;

use sfe_config::{render, validate_schema, RenderFormat};

use crate::cli::WriteArgs;
use crate::commands::Context;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the write command.
///
/// # Errors
///
/// Fails if the mode is rejected, the generated config does not pass schema
/// validation, or the output file exists and `--force` was not given.
pub fn execute(args: WriteArgs, ctx: &Context) -> Result<()> {
    let mode = ctx.resolve_mode(&args.mode)?;

    let mut settings = ctx.settings.clone();
    if let Some(format) = args.format {
        settings.format = RenderFormat::from(format);
    }
    let path = args.out.unwrap_or_else(|| settings.output_path());

    if path.exists() {
        if !args.force {
            return Err(CliError::OutputExists(path));
        }
        ui::warning(&format!("Overwriting {}", path.display()));
    }

    let config = ctx.builder().build(mode);
    validate_schema(&config)?;
    let rendered = render(&config, settings.format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    fs::write(&path, rendered).with_path(&path)?;

    tracing::info!(path = %path.display(), %mode, "wrote bundler config");
    ui::success(&format!("Wrote {} ({mode})", path.display()));
    Ok(())
}
