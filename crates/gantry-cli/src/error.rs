//! Error handling for the gantry CLI.
//!
//! Converts core library errors and I/O failures into user-facing
//! diagnostics with actionable hints.

use std::path::PathBuf;
use thiserror::Error;

mod miette;

pub use miette::cli_error_to_miette;

/// CLI errors with actionable messages.
#[derive(Debug, Error)]
pub enum CliError {
    /// Assembly or validation failure from the core library
    #[error("Configuration error: {0}")]
    Config(#[from] gantry_config::ConfigError),

    /// Problem loading or writing the project manifest
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Invalid command-line argument combination
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from filesystem operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Errors specific to the project manifest (gantry.toml).
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest not found: {}\n\nHint: Create a gantry.toml or pass --manifest <path>", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid manifest: {message}\n\nHint: {hint}")]
    Invalid { message: String, hint: String },

    #[error("Manifest already exists: {}\n\nHint: Pass --force to overwrite it", .0.display())]
    AlreadyExists(PathBuf),
}

/// Result type alias for CLI operations.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add a file path to the error context.
    fn with_path(self, path: &std::path::Path) -> Result<T>;

    /// Replace the error with a custom message.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CliError::FileNotFound(path.to_path_buf()),
            _ => CliError::Custom(format!("{}: {e}", path.display())),
        })
    }

    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| CliError::Custom(format!("{msg}: {e}")))
    }
}
