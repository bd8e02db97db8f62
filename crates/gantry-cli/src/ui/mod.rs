//! Terminal UI utilities for formatted status output.
//!
//! This module provides a small API for displaying status messages in the
//! terminal. It handles environment detection (CI, TTY) and gracefully
//! degrades when terminal features aren't available.
//!
//! # Examples
//!
//! ```no_run
//! use gantry_cli::ui;
//!
//! // Initialize color support
//! ui::init_colors();
//!
//! // Status messages
//! ui::success("Configuration is valid");
//! ui::error("Failed to read manifest");
//! ```

mod messages;

pub use messages::{debug, error, info, success, warning};

/// Check if running in a CI environment.
///
/// Detects common CI environment variables from GitHub Actions, GitLab CI,
/// CircleCI, and Travis CI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Check if stderr is a terminal
    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Should be called early in the application lifecycle (e.g., in main).
/// `owo-colors` respects NO_COLOR and terminal capabilities on its own;
/// this hook exists for explicit initialization and future extension.
pub fn init_colors() {
    let _ = should_use_color();
}
