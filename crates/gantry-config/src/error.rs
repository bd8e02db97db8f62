//! Error types for configuration assembly and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::plugins::PluginKind;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// A fatal, pre-build configuration error.
///
/// Any of these aborts assembly before a configuration reaches the bundling
/// engine. Checker findings (type errors, style violations) are not errors
/// at this layer; the engine-side plugins report those without blocking the
/// build.
#[derive(Debug, Error)]
pub enum ConfigError {
    // Schema validation errors (no filesystem checks)
    #[error("no entry points specified")]
    NoEntries,

    #[error("invalid environment name {name:?}: {reason}")]
    InvalidEnvironment { name: String, reason: String },

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("plugin '{kind}' is declared more than once")]
    DuplicatePlugin { kind: PluginKind },

    #[error("plugin ordering cycle involving: {involved}")]
    PluginCycle { involved: String },

    // Value conversion errors
    #[error("invalid config value for '{field}'")]
    InvalidValue {
        field: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry module not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("root document not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("copy source not found: {}", path.display())]
    CopySourceNotFound { path: PathBuf },
}

impl ConfigError {
    /// Remediation hint for display layers, when one exists.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::SchemaValidation { hint, .. } | Self::InvalidValue { hint, .. } => {
                hint.as_deref()
            }
            Self::NoEntries => Some("Add at least one entry under [entries]"),
            Self::InvalidEnvironment { .. } => {
                Some("Use a short lowercase name such as 'dev' or 'prod'")
            }
            _ => None,
        }
    }
}
