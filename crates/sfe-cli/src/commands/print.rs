//! Print command implementation.

use std::io::Write as _;

use sfe_config::{render, RenderFormat};

use crate::cli::PrintArgs;
use crate::commands::Context;
use crate::error::Result;

/// Render the configuration for the resolved mode to stdout.
pub fn execute(args: PrintArgs, ctx: &Context) -> Result<()> {
    let mode = ctx.resolve_mode(&args.mode)?;
    let format = args.format.map(RenderFormat::from).unwrap_or(ctx.settings.format);

    let config = ctx.builder().build(mode);
    let rendered = render(&config, format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
