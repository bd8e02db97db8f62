//! The configuration assembler: one environment name in, one complete
//! engine configuration out.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chunks::ChunkClassifier;
use crate::environment::Environment;
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::output::{OptimizationOptions, OutputNaming, SourceMaps};
use crate::pattern::PathFilter;
use crate::plugins::{build_plugins, schedule, PluginSpec};
use crate::resolve::ResolveOptions;
use crate::rules::{build_rules, TransformRule};
use crate::validation::{ConfigValidator, SchemaValidator};

/// A fully-assembled build configuration.
///
/// Created fresh on each [`Assembler::assemble`] call and immutable from
/// then on; the external bundling engine consumes it as a serialized value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub environment: Environment,

    /// Entry modules by chunk name.
    pub entries: IndexMap<String, PathBuf>,

    pub resolve: ResolveOptions,

    pub rules: Vec<TransformRule>,

    /// Already scheduled; listing order is execution order.
    pub plugins: Vec<PluginSpec>,

    pub chunks: ChunkClassifier,

    pub naming: OutputNaming,

    pub source_maps: SourceMaps,

    pub optimization: OptimizationOptions,

    /// Paths exempt from change tracking, passed through to the engine's
    /// watcher. Generated style typings would otherwise retrigger builds.
    pub watch_ignore: Vec<PathFilter>,
}

impl BuildConfig {
    /// Serialize for the engine boundary.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Deserialize a configuration produced by [`BuildConfig::to_value`].
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

/// Assembles [`BuildConfig`]s for a fixed project layout.
///
/// The assembler is pure: no filesystem reads, no ambient machine state.
/// The parallelism width is a field precisely so two assemblers with equal
/// fields produce equal configurations on any machine.
///
/// # Example
///
/// ```
/// use gantry_config::{Assembler, Environment, ProjectLayout};
///
/// let assembler = Assembler::new(ProjectLayout::default()).workers(4);
/// let config = assembler.assemble(&Environment::development()).unwrap();
/// assert_eq!(config.entries.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    layout: ProjectLayout,
    workers: usize,
    clean_dry_run: bool,
}

impl Assembler {
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            workers: default_workers(),
            clean_dry_run: false,
        }
    }

    /// Worker count for the parallel transform step. Clamped to at least 1.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Make the cleanup plugin report removals without performing them.
    pub fn clean_dry_run(mut self, dry_run: bool) -> Self {
        self.clean_dry_run = dry_run;
        self
    }

    /// Assemble the configuration for one environment.
    ///
    /// Fails without a partial configuration on any invalid input; equal
    /// assembler state and environment always yield `==` configurations.
    pub fn assemble(&self, env: &Environment) -> Result<BuildConfig> {
        let naming = OutputNaming::for_environment(env);

        let mut entries = IndexMap::new();
        entries.insert("app".to_string(), self.layout.app_entry.clone());
        entries.insert("vendor".to_string(), self.layout.vendor_entry.clone());

        let config = BuildConfig {
            environment: env.clone(),
            entries,
            resolve: ResolveOptions::default(),
            rules: build_rules(&naming, &self.layout, self.workers),
            plugins: schedule(build_plugins(&naming, &self.layout, self.clean_dry_run))?,
            chunks: ChunkClassifier::new(self.layout.vendor_marker.clone()),
            naming,
            source_maps: SourceMaps::default(),
            optimization: OptimizationOptions::default(),
            // Suffix match mirrors both .css.d.ts and .scss.d.ts typings.
            watch_ignore: vec![PathFilter::suffix("css.d.ts")],
        };

        SchemaValidator.validate(&config)?;

        tracing::debug!(
            "assembled configuration for '{}': {} rules, {} plugins",
            env,
            config.rules.len(),
            config.plugins.len()
        );
        Ok(config)
    }

    /// Validate the environment name, then assemble.
    pub fn assemble_named(&self, name: &str) -> Result<BuildConfig> {
        let env = Environment::new(name)?;
        self.assemble(&env)
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(ProjectLayout::default())
    }
}

/// One core stays free for the out-of-band type checker.
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1))
        .unwrap_or(1)
        .max(1)
}
