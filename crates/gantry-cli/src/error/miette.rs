//! Miette integration for rendering CLI errors as terminal diagnostics.

use miette::Report;

use super::CliError;

/// Convert a [`CliError`] into a miette report.
///
/// Core library errors that carry a structured hint get the hint
/// appended so the rendered diagnostic tells the user what to fix.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match &err {
        CliError::Config(config_err) => match config_err.hint() {
            Some(hint) => {
                let hint = hint.to_string();
                miette::miette!(help = hint, "{err}")
            }
            None => miette::miette!("{err}"),
        },
        _ => miette::miette!("{err}"),
    }
}
