//! Command implementations for the sfe CLI.
//!
//! - [`print`] - Render the configuration to stdout
//! - [`write`] - Render the configuration into a file
//! - [`check`] - Validate the configuration against the project layout

pub mod check;
pub mod print;
pub mod write;

use sfe_config::{BuildMode, ConfigBuilder, ModePolicy, Settings};

use crate::cli::ModeArgs;
use crate::error::Result;

pub use check::execute as check_execute;
pub use print::execute as print_execute;
pub use write::execute as write_execute;

/// Inputs shared by every command, gathered once at startup.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub settings: Settings,

    /// Value of the mode variable at startup, if it was set
    pub env_mode: Option<String>,
}

impl Context {
    /// Resolve the build mode: `--mode` first, then the environment value.
    pub fn resolve_mode(&self, args: &ModeArgs) -> Result<BuildMode> {
        let raw = args.mode.as_deref().or(self.env_mode.as_deref());
        let policy = if args.strict {
            ModePolicy::Strict
        } else {
            self.settings.mode_policy
        };

        let mode = BuildMode::resolve(raw, policy)?;
        tracing::debug!(?raw, ?policy, %mode, "resolved build mode");
        Ok(mode)
    }

    pub fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new(&self.settings.root)
    }
}
