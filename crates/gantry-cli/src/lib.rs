//! gantry CLI library.
//!
//! Exposes the CLI internals so integration tests can drive command
//! execution without spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use cli::{Cli, Command};
pub use config::{AssemblySettings, ProjectManifest, MANIFEST_FILE};
pub use error::{CliError, Result};
