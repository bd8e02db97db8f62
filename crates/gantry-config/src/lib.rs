//! Environment-driven build-configuration assembly.
//!
//! Given a validated environment name and a project layout, the assembler
//! produces the complete configuration an external bundling engine
//! consumes: entry points, an extension resolver, environment-aware module
//! substitution, an ordered transform rule set, a scheduled plugin
//! pipeline, vendor chunk classification, and output naming. Assembly is
//! pure and deterministic; the same inputs always produce `==`
//! configurations.
//!
//! ```
//! use gantry_config::{Assembler, Environment, ProjectLayout};
//!
//! let assembler = Assembler::new(ProjectLayout::default()).workers(4);
//! let config = assembler.assemble(&Environment::production()).unwrap();
//!
//! assert_eq!(config.naming.script_template(), "[name].[hash].js");
//! assert!(config.chunks.is_vendor("node_modules/jquery/dist/jquery.js"));
//! ```

pub mod assemble;
pub mod chunks;
pub mod environment;
pub mod error;
pub mod layout;
pub mod output;
pub mod pattern;
pub mod plugins;
pub mod resolve;
pub mod rules;
pub mod validation;

// Re-export main types
pub use assemble::{Assembler, BuildConfig};
pub use chunks::ChunkClassifier;
pub use environment::Environment;
pub use error::{ConfigError, Result};
pub use layout::ProjectLayout;
pub use output::{OptimizationOptions, OutputNaming, SourceMaps};
pub use pattern::PathFilter;
pub use plugins::{
    build_plugins, schedule, CleanOptions, CopyAssetsOptions, CopyPair, ExposeGlobalsOptions,
    ExtractStylesOptions, InjectAt, InjectDocumentOptions, PluginKind, PluginSpec,
    SplitChunksOptions, StyleLintOptions, TypeCheckOptions,
};
pub use resolve::{ResolveOptions, Rewrite, SubstitutionRule, ENVIRONMENT_MODULE};
pub use rules::{build_rules, RulePhase, TransformRule, TransformStep};

// Re-export validation
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
