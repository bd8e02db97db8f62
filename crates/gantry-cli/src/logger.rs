//! Logging infrastructure for the gantry CLI.
//!
//! This module provides a structured logging setup using the `tracing` ecosystem.
//! It supports multiple verbosity levels, colored output, and environment-based
//! configuration for debugging.
//!
//! # Example
//!
//! ```rust,no_run
//! use gantry_cli::logger::init_logger;
//! use tracing::{info, debug};
//!
//! init_logger(false, false, false);
//!
//! info!("Assembling configuration");
//! debug!("Resolving request: {}", "environments/environment");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// This function sets up structured logging for the CLI. It should be called
/// once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: Sets level to DEBUG for gantry crates
/// 2. `--quiet` flag: Sets level to ERROR only
/// 3. `RUST_LOG` environment variable: Custom filter
/// 4. Default: INFO level for gantry crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    // Determine the filter level based on flags and environment
    let filter = if verbose {
        // Verbose mode: debug level for gantry crates, info for dependencies
        EnvFilter::new("gantry=debug,gantry_config=debug,gantry_cli=debug")
    } else if quiet {
        // Quiet mode: only errors
        EnvFilter::new("gantry=error")
    } else {
        // Try to read from RUST_LOG env var, fallback to info level
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("gantry=info,gantry_config=info,gantry_cli=info"))
    };

    // Configure the formatter
    let fmt_layer = fmt::layer()
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true) // Show log level (INFO, DEBUG, etc.)
        .with_ansi(!no_color) // Enable colors unless disabled
        .compact(); // Use compact formatting for better readability

    // Initialize the global subscriber
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Initialize logger with a custom environment filter.
///
/// Useful for testing or advanced scenarios where precise control over
/// log filtering is needed.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
