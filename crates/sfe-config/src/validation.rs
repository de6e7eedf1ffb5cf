//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::bundle::{BundlerConfig, PluginKind};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use sfe_config::{build_config, BuildMode, ConfigValidator, SchemaValidator};
///
/// SchemaValidator.validate(&build_config(BuildMode::Production)).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, modules) in &config.entry {
            if modules.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{name}' has no modules"),
                    hint: Some("List at least one module for every entry".to_string()),
                });
            }
        }

        for rule in config.rules() {
            if rule.chain.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule '{}' has an empty loader chain", rule.test),
                    hint: Some("Every rule needs at least one loader in 'use'".to_string()),
                });
            }
            rule.compiled_test()?;
        }

        for (import, external) in &config.externals {
            if import.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "external import names cannot be empty".to_string(),
                    hint: Some("Remove empty keys from 'externals'".to_string()),
                });
            }
            if external.aliases().iter().any(|alias| alias.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("external '{import}' has an empty alias"),
                    hint: Some(
                        "Set root, commonjs2, commonjs and amd for every external".to_string(),
                    ),
                });
            }
        }

        if config.output.library.is_empty()
            || !config.output.library.iter().all(|part| is_identifier(part))
        {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "library name '{}' is not a valid JavaScript identifier",
                    config.output.library_name()
                ),
                hint: Some(
                    "Use letters, digits, '_' or '$', not starting with a digit".to_string(),
                ),
            });
        }

        if config.mode.is_production() && config.has_plugin(PluginKind::HotModuleReplacement) {
            return Err(ConfigError::SchemaValidation {
                message: "hot module replacement is enabled in a production build".to_string(),
                hint: Some("Remove HotModuleReplacementPlugin from production plugins".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that entry modules and rule include
/// directories exist. Relative paths are resolved against `root`.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BundlerConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for module in config.entry.values().flatten() {
            let path = self.root.join(module);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        for dir in config.rules().iter().flat_map(|rule| &rule.include) {
            let path = self.root.join(dir);
            if !path.is_dir() {
                return Err(ConfigError::IncludeDirNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BundlerConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BundlerConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
