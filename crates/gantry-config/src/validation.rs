//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation
//! (for library use).

use std::path::Path;

use crate::assemble::BuildConfig;
use crate::error::{ConfigError, Result};
use crate::plugins::PluginSpec;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate an assembled configuration
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this where the project tree is not available, or not relevant: the
/// assembler runs it on every configuration it returns.
///
/// # Example
///
/// ```
/// use gantry_config::{Assembler, ConfigValidator, Environment, SchemaValidator};
///
/// let config = Assembler::default().assemble(&Environment::development()).unwrap();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // Entry validation
        if config.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, path) in &config.entries {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry chunk names cannot be empty".to_string(),
                    hint: Some("Name every entry, e.g. 'app' or 'vendor'".to_string()),
                });
            }
            if path.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{name}' has an empty path"),
                    hint: Some("Point each entry at a source module".to_string()),
                });
            }
        }

        // Resolver validation
        if config.resolve.extensions.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "resolver extension list is empty".to_string(),
                hint: Some("Extensionless imports need at least one candidate".to_string()),
            });
        }
        for ext in &config.resolve.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::SchemaValidation {
                    message: format!("resolver extension {ext:?} must start with '.'"),
                    hint: Some("Write extensions as '.ts', '.js', ...".to_string()),
                });
            }
        }

        // Rule validation
        for rule in &config.rules {
            if rule.steps.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("transform rule '{}' declares no steps", rule.name),
                    hint: Some("Every rule needs at least one transformer".to_string()),
                });
            }
            if rule.test.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("transform rule '{}' can never match", rule.name),
                    hint: Some("Give the rule's test a non-empty extension list".to_string()),
                });
            }
        }

        // Plugin validation
        for (i, plugin) in config.plugins.iter().enumerate() {
            let kind = plugin.kind();
            if config.plugins[..i].iter().any(|p| p.kind() == kind) {
                return Err(ConfigError::DuplicatePlugin { kind });
            }
            if let PluginSpec::ExposeGlobals(expose) = plugin {
                for (module, names) in &expose.globals {
                    if module.trim().is_empty() || names.is_empty() {
                        return Err(ConfigError::SchemaValidation {
                            message: "exposed globals need a module and at least one name"
                                .to_string(),
                            hint: Some(
                                "Map each module request to its global names".to_string(),
                            ),
                        });
                    }
                }
            }
        }

        // Classifier validation
        if config.chunks.vendor_marker.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "vendor marker cannot be empty".to_string(),
                hint: Some("An empty marker would classify every module as vendor".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that entry modules, the injection template, and copy sources
/// exist on disk.
///
/// # Example
///
/// ```no_run
/// use gantry_config::{Assembler, ConfigValidator, Environment, FsValidator};
///
/// let config = Assembler::default().assemble(&Environment::development()).unwrap();
/// FsValidator::new(".").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        // Then validate filesystem references
        for entry in config.entries.values() {
            let path = self.root.join(entry);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        for plugin in &config.plugins {
            match plugin {
                PluginSpec::InjectDocument(inject) => {
                    let path = self.root.join(&inject.template);
                    if !path.exists() {
                        return Err(ConfigError::DocumentNotFound { path });
                    }
                }
                PluginSpec::CopyAssets(copy) => {
                    for pair in &copy.pairs {
                        let path = self.root.join(&pair.from);
                        if !path.exists() {
                            return Err(ConfigError::CopySourceNotFound { path });
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
