//! Command implementations for the gantry CLI.
//!
//! This module contains the implementation of all CLI commands:
//!
//! - [`assemble`] - Assemble the configuration for an environment
//! - [`check`] - Validate the configuration and referenced paths
//! - [`explain`] - Show how the configuration treats a source path
//! - [`init`] - Write a starter project manifest
//!
//! Each command is implemented in its own module and provides an `execute`
//! function that takes the parsed command arguments and returns a Result.

pub mod assemble;
pub mod check;
pub mod explain;
pub mod init;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use assemble::execute as assemble_execute;
pub use check::execute as check_execute;
pub use explain::execute as explain_execute;
pub use init::execute as init_execute;
