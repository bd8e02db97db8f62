//! Build-lifecycle plugins: cleanup, copying, checking, extraction,
//! document injection, and chunk splitting.
//!
//! A plugin here is a declaration the engine executes, not code this crate
//! runs. Each kind carries a typed options struct; execution order is
//! decided by [`schedule`], never by hand-maintained listing positions.

mod builder;
mod schedule;

pub use builder::build_plugins;
pub use schedule::schedule;

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Bare plugin discriminant, used for ordering relations and duplicate
/// detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    Clean,
    CopyAssets,
    TypeCheck,
    StyleLint,
    ExposeGlobals,
    ExtractStyles,
    InjectDocument,
    SplitChunks,
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clean => "clean",
            Self::CopyAssets => "copy_assets",
            Self::TypeCheck => "type_check",
            Self::StyleLint => "style_lint",
            Self::ExposeGlobals => "expose_globals",
            Self::ExtractStyles => "extract_styles",
            Self::InjectDocument => "inject_document",
            Self::SplitChunks => "split_chunks",
        };
        f.write_str(name)
    }
}

/// A fully-configured plugin declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PluginSpec {
    Clean(CleanOptions),
    CopyAssets(CopyAssetsOptions),
    TypeCheck(TypeCheckOptions),
    StyleLint(StyleLintOptions),
    ExposeGlobals(ExposeGlobalsOptions),
    ExtractStyles(ExtractStylesOptions),
    InjectDocument(InjectDocumentOptions),
    SplitChunks(SplitChunksOptions),
}

impl PluginSpec {
    pub fn kind(&self) -> PluginKind {
        match self {
            Self::Clean(_) => PluginKind::Clean,
            Self::CopyAssets(_) => PluginKind::CopyAssets,
            Self::TypeCheck(_) => PluginKind::TypeCheck,
            Self::StyleLint(_) => PluginKind::StyleLint,
            Self::ExposeGlobals(_) => PluginKind::ExposeGlobals,
            Self::ExtractStyles(_) => PluginKind::ExtractStyles,
            Self::InjectDocument(_) => PluginKind::InjectDocument,
            Self::SplitChunks(_) => PluginKind::SplitChunks,
        }
    }

    /// Kinds this plugin must run after. Relations naming kinds absent from
    /// a pipeline are satisfied vacuously.
    pub fn runs_after(&self) -> &'static [PluginKind] {
        match self.kind() {
            // Cleanup owns the empty output directory; nothing precedes it.
            PluginKind::Clean => &[],
            // The injected document references extracted stylesheets and
            // split chunks by their final names.
            PluginKind::InjectDocument => &[
                PluginKind::Clean,
                PluginKind::ExtractStyles,
                PluginKind::SplitChunks,
            ],
            _ => &[PluginKind::Clean],
        }
    }
}

/// Removes stale output directories before the build writes anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    pub targets: Vec<PathBuf>,

    /// Log each removed entry.
    pub verbose: bool,

    /// Report what would be removed without touching the filesystem.
    #[serde(default)]
    pub dry_run: bool,
}

/// Copies static files and directories into the output verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyAssetsOptions {
    pub pairs: Vec<CopyPair>,
}

/// One copy source, with an optional destination relative to the output
/// root. Without a destination the source lands at the root under its own
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPair {
    pub from: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<PathBuf>,
}

/// Out-of-band type checking and linting.
///
/// Findings are diagnostics only; the transform chain stays transpile-only
/// and the build never blocks on a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCheckOptions {
    /// Directories watched for incremental re-checks.
    pub watch: Vec<PathBuf>,

    /// Also surface syntactic errors, not just semantic ones.
    pub syntactic_errors: bool,

    /// Run the source linter alongside the checker.
    pub lint: bool,
}

/// Stylesheet linting, diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleLintOptions {
    /// Explicit lint configuration; discovered from the project when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Binds module exports to global names instead of per-file shimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposeGlobalsOptions {
    /// Module request to the global names bound to its export.
    pub globals: IndexMap<String, Vec<String>>,
}

/// Pulls compiled styles out of script bundles into standalone stylesheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractStylesOptions {
    /// Naming template for extracted files.
    pub filename: String,
}

/// Generates the served document from a template, wiring in emitted
/// artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectDocumentOptions {
    pub template: PathBuf,
    pub inject_at: InjectAt,
}

/// Where generated tags are injected in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectAt {
    #[default]
    Head,
    Body,
}

/// Splits classifier-selected modules into a named chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunksOptions {
    pub chunk_name: String,
}
