//! gantry CLI - environment-driven build configuration assembly.
//!
//! This is the main entry point for the gantry CLI. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use gantry_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Assemble(assemble_args) => commands::assemble_execute(assemble_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Explain(explain_args) => commands::explain_execute(explain_args),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    // Convert CLI errors to miette diagnostics for rendered error reporting
    result.map_err(error::cli_error_to_miette)
}
