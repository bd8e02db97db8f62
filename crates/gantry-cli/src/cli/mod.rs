//! Command-line interface definition for the gantry assembler.
//!
//! This module defines the complete CLI structure using clap v4's derive macros.
//! It provides type-safe argument parsing with validation and clear error
//! messages.
//!
//! # Command Structure
//!
//! - `gantry assemble` - Assemble the configuration for an environment
//! - `gantry check` - Validate the configuration and referenced paths
//! - `gantry explain` - Show how the configuration treats a source path
//! - `gantry init` - Write a starter project manifest

mod commands;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{AssembleArgs, CheckArgs, Command, ExplainArgs, InitArgs};
pub use validation::parse_environment;

/// gantry - environment-driven build configuration assembly
#[derive(Parser, Debug)]
#[command(
    name = "gantry",
    version,
    about = "Assemble environment-driven build configurations",
    long_about = "Gantry assembles a complete, deterministic build configuration from a\n\
                  project layout and a target environment: entry points, module\n\
                  resolution with environment-specific substitution, transform rules,\n\
                  a scheduled plugin pipeline, and chunk classification."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows detailed information about the assembly process, including
    /// rule construction and plugin scheduling.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI/CD environments
    /// or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Useful for logging to
    /// files or systems that don't support colored terminal output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
