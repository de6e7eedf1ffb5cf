//! Build mode and the policy used to resolve it from a raw string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Build mode supplied once per build invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Unminified output, inline source maps, hot module replacement
    #[default]
    Development,
    /// Minified output, external source maps
    Production,
}

impl BuildMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Resolve a raw mode value (typically `NODE_ENV`) under `policy`.
    ///
    /// An absent value is always development. Under [`ModePolicy::Permissive`]
    /// anything other than `"production"` is development as well; under
    /// [`ModePolicy::Strict`] unrecognized values are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use sfe_config::{BuildMode, ModePolicy};
    ///
    /// let mode = BuildMode::resolve(Some("staging"), ModePolicy::Permissive).unwrap();
    /// assert_eq!(mode, BuildMode::Development);
    ///
    /// assert!(BuildMode::resolve(Some("staging"), ModePolicy::Strict).is_err());
    /// ```
    pub fn resolve(raw: Option<&str>, policy: ModePolicy) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::Development);
        };

        match (raw.parse::<Self>(), policy) {
            (Ok(mode), _) => Ok(mode),
            (Err(_), ModePolicy::Permissive) => {
                tracing::debug!(
                    value = raw,
                    "unrecognized build mode, falling back to development"
                );
                Ok(Self::Development)
            }
            (Err(err), ModePolicy::Strict) => Err(err),
        }
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::UnknownMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an unrecognized mode string is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePolicy {
    /// Unknown values silently become development
    #[default]
    Permissive,
    /// Unknown values are a configuration error
    Strict,
}
