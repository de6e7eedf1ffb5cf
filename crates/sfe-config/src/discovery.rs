//! File-based settings discovery for CLI use
//!
//! Layers, lowest priority first: built-in defaults, `sfe.toml` in the
//! project directory, then `SFE_`-prefixed environment variables.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::error::{ConfigError, Result};
use crate::settings::Settings;

/// Settings file name looked up in the project directory
pub const SETTINGS_FILE: &str = "sfe.toml";

/// Prefix of environment variables overriding settings (`SFE_FORMAT`, ...)
pub const ENV_PREFIX: &str = "SFE_";

/// File-based settings discovery
///
/// # Example
///
/// ```no_run
/// use sfe_config::ConfigDiscovery;
///
/// let settings = ConfigDiscovery::new(".").load().unwrap();
/// println!("mode read from ${}", settings.mode_env);
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the settings file, if the project has one.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(SETTINGS_FILE);
        path.is_file().then_some(path)
    }

    /// Load settings from defaults, the settings file and the environment.
    ///
    /// A relative `root` is resolved against the discovery directory, and
    /// the result is made absolute: the bundler rejects a relative
    /// `output.path` and matches `include` against absolute module paths.
    pub fn load(&self) -> Result<Settings> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        if let Some(path) = self.find() {
            tracing::debug!(path = %path.display(), "loading settings file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let mut settings: Settings = figment.extract().map_err(|e| ConfigError::InvalidSettings {
            message: e.to_string(),
        })?;

        settings.root = std::path::absolute(self.anchor(&settings.root))?;
        Ok(settings)
    }

    fn anchor(&self, root: &Path) -> PathBuf {
        if root.is_absolute() {
            root.to_path_buf()
        } else if root == Path::new(".") {
            self.root.clone()
        } else {
            self.root.join(root)
        }
    }
}
