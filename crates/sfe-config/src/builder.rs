//! Mode-driven derivation of the bundler configuration.
//!
//! Everything here is a pure function of the [`BuildMode`] and the project
//! root: no environment access, no I/O. Callers resolve the mode once at the
//! program's entry point and pass it in.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::bundle::{
    peer_externals, BundlerConfig, DevtoolStrategy, LoaderRule, ModuleOptions, OutputDescriptor,
    PluginSpec, ResolveOptions, Target,
};
use crate::mode::BuildMode;

/// Entry chunk name
pub const ENTRY_NAME: &str = "index";

/// Entry module, relative to the project root
pub const ENTRY_MODULE: &str = "src/index.js";

/// Builds [`BundlerConfig`]s with paths anchored at a project root.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    root: PathBuf,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ConfigBuilder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Derive the full configuration for `mode`.
    ///
    /// # Example
    ///
    /// ```
    /// use sfe_config::{BuildMode, ConfigBuilder, DevtoolStrategy};
    ///
    /// let config = ConfigBuilder::new("/work/form-editor").build(BuildMode::Production);
    /// assert_eq!(config.devtool, DevtoolStrategy::ExternalProduction);
    /// assert_eq!(config.output.path, std::path::Path::new("/work/form-editor/build"));
    /// ```
    pub fn build(&self, mode: BuildMode) -> BundlerConfig {
        tracing::debug!(%mode, root = %self.root.display(), "deriving bundler config");

        let mut entry = IndexMap::with_capacity(1);
        entry.insert(ENTRY_NAME.to_string(), vec![self.root.join(ENTRY_MODULE)]);

        BundlerConfig {
            mode,
            devtool: devtool_for(mode),
            entry,
            target: Target::Web,
            output: OutputDescriptor::library(&self.root),
            plugins: plugins_for(mode),
            module: ModuleOptions {
                rules: rules_for(&self.root),
            },
            resolve: ResolveOptions::default(),
            externals: peer_externals(),
        }
    }
}

/// Derive the configuration for `mode` with paths relative to `.`.
pub fn build_config(mode: BuildMode) -> BundlerConfig {
    ConfigBuilder::default().build(mode)
}

fn devtool_for(mode: BuildMode) -> DevtoolStrategy {
    match mode {
        BuildMode::Production => DevtoolStrategy::ExternalProduction,
        BuildMode::Development => DevtoolStrategy::Inline,
    }
}

fn plugins_for(mode: BuildMode) -> Vec<PluginSpec> {
    let hot_reload = match mode {
        BuildMode::Production => None,
        BuildMode::Development => Some(PluginSpec::HotModuleReplacement),
    };

    [PluginSpec::OccurrenceOrder, PluginSpec::define_globals(mode)]
        .into_iter()
        .chain(hot_reload)
        .collect()
}

fn rules_for(root: &Path) -> Vec<LoaderRule> {
    vec![LoaderRule::script(root), LoaderRule::less(), LoaderRule::css()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::PluginKind;

    #[test]
    fn development_appends_hot_reload_last() {
        let kinds: Vec<_> = plugins_for(BuildMode::Development)
            .iter()
            .map(PluginSpec::kind)
            .collect();
        assert_eq!(
            kinds,
            [
                PluginKind::OccurrenceOrder,
                PluginKind::Define,
                PluginKind::HotModuleReplacement
            ]
        );
    }

    #[test]
    fn production_has_no_hot_reload() {
        let kinds: Vec<_> = plugins_for(BuildMode::Production)
            .iter()
            .map(PluginSpec::kind)
            .collect();
        assert_eq!(kinds, [PluginKind::OccurrenceOrder, PluginKind::Define]);
    }

    #[test]
    fn entry_is_anchored_at_root() {
        let config = ConfigBuilder::new("/repo").build(BuildMode::Development);
        assert_eq!(config.entry.len(), 1);
        assert_eq!(config.entry[ENTRY_NAME], vec![PathBuf::from("/repo/src/index.js")]);
    }
}
