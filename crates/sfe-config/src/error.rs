//! Error types for configuration derivation, validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Mode resolution (strict policy only)
    #[error("unknown build mode '{value}' (expected 'development' or 'production')")]
    UnknownMode { value: String },

    // Filesystem validation errors (for CLI use)
    #[error("entry module not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("rule include directory not found: {}", path.display())]
    IncludeDirNotFound { path: PathBuf },

    // Settings loading errors
    #[error("invalid settings: {message}")]
    InvalidSettings { message: String },

    #[error("invalid config value for '{field}'")]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors (no filesystem checks)
    #[error("no entry points specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors (resolving the project root)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Actionable hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::SchemaValidation { hint, .. } | Self::InvalidValue { hint, .. } => {
                hint.as_deref()
            }
            Self::UnknownMode { .. } => {
                Some("Set the mode variable to 'development' or 'production', or drop --strict")
            }
            _ => None,
        }
    }
}
