//! Bundler configuration record consumed by the external bundler.

mod externals;
mod output;
mod plugin;
mod rule;
mod types;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::mode::BuildMode;

pub use externals::{peer_externals, ExternalDependency, Externals};
pub use output::{OutputDescriptor, DEVTOOL_MODULE_TEMPLATE, LIBRARY_NAME, OUTPUT_DIR};
pub use plugin::{PluginKind, PluginSpec};
pub use rule::{LoaderRule, SCRIPT_SOURCE_DIRS};
pub use types::{DevtoolStrategy, LibraryTarget, Target};

/// Extensions tried, in order, when resolving an import without one
pub const RESOLVE_EXTENSIONS: [&str; 3] = ["*", ".js", ".jsx"];

/// Complete configuration for one bundler run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundlerConfig {
    pub mode: BuildMode,

    pub devtool: DevtoolStrategy,

    /// Entry name → modules bundled into it
    pub entry: IndexMap<String, Vec<PathBuf>>,

    pub target: Target,

    pub output: OutputDescriptor,

    /// Plugin directives, in execution order
    pub plugins: Vec<PluginSpec>,

    pub module: ModuleOptions,

    pub resolve: ResolveOptions,

    /// Modules left out of the bundle and supplied by the host
    pub externals: Externals,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<LoaderRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: RESOLVE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BundlerConfig {
    pub fn rules(&self) -> &[LoaderRule] {
        &self.module.rules
    }

    /// First loader rule that handles `path`.
    ///
    /// # Example
    ///
    /// ```
    /// use sfe_config::build_config;
    /// use sfe_config::BuildMode;
    /// use std::path::Path;
    ///
    /// let config = build_config(BuildMode::Development);
    /// let rule = config.rule_for(Path::new("src/index.js")).unwrap();
    /// assert_eq!(rule.chain, ["babel-loader", "eslint-loader"]);
    /// ```
    pub fn rule_for(&self, path: &Path) -> Option<&LoaderRule> {
        self.module.rules.iter().find(|rule| rule.applies_to(path))
    }

    pub fn is_external(&self, import: &str) -> bool {
        self.externals.contains_key(import)
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugins.iter().any(|plugin| plugin.kind() == kind)
    }

    /// Create from serde_json::Value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
