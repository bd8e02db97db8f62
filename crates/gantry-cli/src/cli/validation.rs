//! Custom clap value parsers.

use gantry_config::Environment;

/// Validate an environment name at argument-parsing time.
///
/// Delegates to [`Environment::new`] so the CLI rejects malformed names
/// with the same rules the core library enforces, but as a usage error
/// instead of a runtime failure.
pub fn parse_environment(name: &str) -> Result<String, String> {
    Environment::new(name)
        .map(|env| env.as_str().to_string())
        .map_err(|err| err.to_string())
}
