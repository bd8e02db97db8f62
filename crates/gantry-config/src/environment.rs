//! Build environment identity.
//!
//! Every assembled configuration is parameterized by exactly one environment
//! name. The name selects which environment module the substitution layer
//! rewires to and whether production output conventions apply.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A validated environment name such as `dev`, `staging`, or `prod`.
///
/// Environment names become part of rewritten module requests
/// (`environments/environment.prod`), so anything that would change the
/// shape of a path is rejected up front.
///
/// # Example
///
/// ```
/// use gantry_config::Environment;
///
/// let env = Environment::new("prod").unwrap();
/// assert!(env.is_production());
/// assert!(Environment::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Environment(String);

impl Environment {
    /// The conventional development environment name.
    pub const DEVELOPMENT: &'static str = "dev";

    /// The environment name that switches on production output conventions.
    pub const PRODUCTION: &'static str = "prod";

    /// Validate and wrap an environment name.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvironment {
                name,
                reason: "name is empty".to_string(),
            });
        }
        if trimmed != name {
            return Err(ConfigError::InvalidEnvironment {
                name,
                reason: "name has leading or trailing whitespace".to_string(),
            });
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        {
            return Err(ConfigError::InvalidEnvironment {
                name: name.clone(),
                reason: format!("character {bad:?} is not allowed"),
            });
        }

        Ok(Self(name))
    }

    /// The development environment.
    pub fn development() -> Self {
        Self(Self::DEVELOPMENT.to_string())
    }

    /// The production environment.
    pub fn production() -> Self {
        Self(Self::PRODUCTION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether production output conventions (hashed filenames, module
    /// concatenation) apply.
    pub fn is_production(&self) -> bool {
        self.0 == Self::PRODUCTION
    }

    pub fn is_development(&self) -> bool {
        self.0 == Self::DEVELOPMENT
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Environment> for String {
    fn from(env: Environment) -> Self {
        env.0
    }
}
