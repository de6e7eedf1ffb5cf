//! Tool settings: where the mode comes from and where output goes.
//!
//! These never alter the fixed bundler values; they only steer how the
//! generator is driven.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mode::{BuildMode, ModePolicy};
use crate::render::RenderFormat;

/// Environment variable the build mode is read from by default
pub const DEFAULT_MODE_ENV: &str = "NODE_ENV";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the environment variable holding the build mode
    #[serde(default = "default_mode_env")]
    pub mode_env: String,

    #[serde(default)]
    pub mode_policy: ModePolicy,

    /// Project root that entry, include and output paths are anchored at
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub format: RenderFormat,

    /// Output file for `write`; defaults to the format's conventional name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode_env: default_mode_env(),
            mode_policy: ModePolicy::default(),
            root: default_root(),
            format: RenderFormat::default(),
            output_file: None,
        }
    }
}

impl Settings {
    /// Resolve a raw mode value under the configured policy.
    pub fn resolve_mode(&self, raw: Option<&str>) -> Result<BuildMode> {
        BuildMode::resolve(raw, self.mode_policy)
    }

    /// Where `write` puts the rendered config.
    pub fn output_path(&self) -> PathBuf {
        let file = self
            .output_file
            .as_deref()
            .unwrap_or_else(|| Path::new(self.format.default_file_name()));
        self.root.join(file)
    }
}

fn default_mode_env() -> String {
    DEFAULT_MODE_ENV.to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}
