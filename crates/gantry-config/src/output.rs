//! Output naming, source maps, and optimization policy.
//!
//! This is the single place where the environment changes assembled output:
//! production builds embed a content hash in artifact names so deployments
//! cache-bust, every other environment keeps stable names for fast local
//! iteration.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;

/// Artifact naming templates handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputNaming {
    /// Embed a content hash in artifact names.
    pub hashed: bool,
}

impl OutputNaming {
    /// Naming policy for an environment: hashed iff production.
    pub fn for_environment(env: &Environment) -> Self {
        Self {
            hashed: env.is_production(),
        }
    }

    /// Template for emitted script bundles.
    pub fn script_template(&self) -> String {
        self.template("js")
    }

    /// Template for extracted stylesheets.
    pub fn stylesheet_template(&self) -> String {
        self.template("css")
    }

    /// Template for emitted binary assets; the extension placeholder keeps
    /// the source extension.
    pub fn asset_template(&self) -> String {
        self.template("[ext]")
    }

    fn template(&self, ext: &str) -> String {
        if self.hashed {
            format!("[name].[hash].{ext}")
        } else {
            format!("[name].{ext}")
        }
    }
}

/// Position-map emission mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMaps {
    /// No source maps.
    None,
    /// Inline, embedded in the artifact.
    Inline,
    /// External `.map` files.
    #[default]
    External,
}

/// Engine optimization switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationOptions {
    /// Hoist modules into a single scope where the graph allows it.
    pub concatenate_modules: bool,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self {
            concatenate_modules: true,
        }
    }
}
