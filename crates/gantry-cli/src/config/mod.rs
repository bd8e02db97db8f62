//! Project manifest (gantry.toml) types and loading.
//!
//! The manifest carries everything the CLI needs to drive assembly: the
//! project layout handed to the core library and a handful of assembly
//! settings that would otherwise come from flags.

mod loading;

use gantry_config::{Assembler, Environment, ProjectLayout};
use serde::{Deserialize, Serialize};

/// Manifest file name searched for in the working directory.
pub const MANIFEST_FILE: &str = "gantry.toml";

/// The project manifest, everything gantry.toml can say.
///
/// # Example
///
/// ```toml
/// [layout]
/// app_entry = "src/main.ts"
/// vendor_entry = "src/vendor.ts"
///
/// [assembly]
/// environment = "dev"
/// workers = 4
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectManifest {
    /// Filesystem layout of the project
    pub layout: ProjectLayout,
    /// Assembly settings independent of the layout
    pub assembly: AssemblySettings,
}

/// Assembly settings from the `[assembly]` manifest table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblySettings {
    /// Environment assembled when --env is omitted.
    pub environment: String,
    /// Worker count for the parallel transform step. One less than the
    /// available core count when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
    /// Make the cleanup plugin report removals without performing them.
    pub clean_dry_run: bool,
}

impl Default for AssemblySettings {
    fn default() -> Self {
        Self {
            environment: Environment::DEVELOPMENT.to_string(),
            workers: None,
            clean_dry_run: false,
        }
    }
}

impl ProjectManifest {
    /// Build an [`Assembler`] configured from this manifest.
    pub fn assembler(&self) -> Assembler {
        let mut assembler =
            Assembler::new(self.layout.clone()).clean_dry_run(self.assembly.clean_dry_run);
        if let Some(workers) = self.assembly.workers {
            assembler = assembler.workers(workers);
        }
        assembler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_manifest_targets_dev() {
        let manifest = ProjectManifest::default();
        assert_eq!(manifest.assembly.environment, "dev");
        assert_eq!(manifest.assembly.workers, None);
        assert!(!manifest.assembly.clean_dry_run);
    }

    #[test]
    fn manifest_round_trips_through_toml() {
        let manifest = ProjectManifest::default();
        let text = toml::to_string(&manifest).unwrap();
        let back: ProjectManifest = toml::from_str(&text).unwrap();
        assert_eq!(back, manifest);
    }

    #[test]
    fn partial_manifest_fills_defaults() {
        let manifest: ProjectManifest = toml::from_str(
            r#"
            [layout]
            app_entry = "web/boot.ts"

            [assembly]
            environment = "staging"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.layout.app_entry, PathBuf::from("web/boot.ts"));
        assert_eq!(manifest.layout.vendor_entry, PathBuf::from("src/vendor.ts"));
        assert_eq!(manifest.assembly.environment, "staging");
    }

    #[test]
    fn assembler_carries_manifest_settings() {
        let manifest: ProjectManifest = toml::from_str(
            r#"
            [assembly]
            workers = 3
            clean_dry_run = true
            "#,
        )
        .unwrap();

        let config = manifest
            .assembler()
            .assemble(&Environment::development())
            .unwrap();
        let value = config.to_value().unwrap();
        let rules = value["rules"].as_array().unwrap();
        let script_rule = rules
            .iter()
            .find(|r| r["name"] == "script-sources")
            .unwrap();
        let parallel = script_rule["steps"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["name"] == "parallel")
            .unwrap();
        assert_eq!(parallel["options"]["workers"], 3);
    }
}
