use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_environment;

/// Available gantry subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the configuration for an environment
    ///
    /// Produces the complete build configuration as JSON: entry points,
    /// resolution options, transform rules, the scheduled plugin pipeline,
    /// and chunk classification.
    Assemble(AssembleArgs),

    /// Validate the configuration and referenced paths
    ///
    /// Assembles the configuration for the target environment and checks it
    /// for structural errors. With --paths, also verifies that every file
    /// the configuration references exists on disk.
    Check(CheckArgs),

    /// Show how the configuration treats a source path
    ///
    /// Prints the transform rules that select the path, its chunk
    /// classification, and any environment-specific module substitution.
    Explain(ExplainArgs),

    /// Write a starter project manifest
    ///
    /// Creates a gantry.toml with the default project layout and assembly
    /// settings, ready to edit.
    Init(InitArgs),
}

/// Arguments for the assemble command
#[derive(Args, Debug)]
pub struct AssembleArgs {
    /// Target environment (e.g. dev, staging, prod)
    ///
    /// Selects the environment the configuration is assembled for. Output
    /// names embed a content hash only for prod, and module requests for
    /// the environment descriptor are rewritten to the matching variant
    /// for every environment except dev.
    #[arg(short, long, value_name = "NAME", value_parser = parse_environment)]
    pub env: Option<String>,

    /// Path to the project manifest
    ///
    /// Specify a custom manifest location. If not provided, gantry.toml in
    /// the current directory is used when present, defaults otherwise.
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pub pretty: bool,

    /// Worker count for the parallel transform step
    ///
    /// Overrides the default of one less than the available core count.
    /// Clamped to at least one.
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Make the cleanup plugin report removals without performing them
    #[arg(long)]
    pub dry_run_clean: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Target environment (e.g. dev, staging, prod)
    #[arg(short, long, value_name = "NAME", value_parser = parse_environment)]
    pub env: Option<String>,

    /// Path to the project manifest
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Also verify that referenced files exist on disk
    ///
    /// Checks entry points, the document template, and copy sources against
    /// the filesystem. Paths are resolved relative to the manifest location.
    #[arg(long)]
    pub paths: bool,

    /// Show warnings in addition to errors
    ///
    /// Displays potential issues that won't prevent assembly but might
    /// indicate configuration problems, such as a missing environment
    /// variant module. Warnings never change the exit status.
    #[arg(short, long)]
    pub warnings: bool,
}

/// Arguments for the explain command
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Source path or module request to explain
    ///
    /// Examples:
    ///   gantry explain src/app/main.ts
    ///   gantry explain node_modules/lodash/index.js
    ///   gantry explain src/environments/environment --env prod
    #[arg(required = true, value_name = "PATH")]
    pub path: String,

    /// Target environment (e.g. dev, staging, prod)
    #[arg(short, long, value_name = "NAME", value_parser = parse_environment)]
    pub env: Option<String>,

    /// Path to the project manifest
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest into
    ///
    /// The manifest is written as gantry.toml inside this directory.
    /// Created if it doesn't exist.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing manifest
    #[arg(short, long)]
    pub force: bool,
}
