//! Check command implementation.
//!
//! Builds the configuration and validates it against the project on disk
//! without writing anything.

use sfe_config::{BuildMode, ConfigValidator, FsValidator};

use crate::cli::CheckArgs;
use crate::commands::Context;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Resolve the build mode (or take both with `--all-modes`)
/// 2. Schema-validate the derived configuration
/// 3. Check the entry module and rule include directories exist
pub fn execute(args: CheckArgs, ctx: &Context) -> Result<()> {
    let modes = if args.all_modes {
        vec![BuildMode::Development, BuildMode::Production]
    } else {
        vec![ctx.resolve_mode(&args.mode)?]
    };

    let builder = ctx.builder();
    let validator = FsValidator::new(builder.root());

    for mode in modes {
        ui::info(&format!("Checking {mode} configuration..."));
        let config = builder.build(mode);
        validator
            .validate(&config)
            .with_hint(format!("Project root: {}", builder.root().display()))?;

        tracing::debug!(
            %mode,
            rules = config.rules().len(),
            externals = config.externals.len(),
            "configuration valid"
        );
        ui::success(&format!("{mode} configuration is valid"));
    }

    Ok(())
}
