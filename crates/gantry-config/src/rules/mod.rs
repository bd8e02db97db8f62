//! Transform rules: which transformer chains apply to which sources.

mod builder;

pub use builder::build_rules;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pattern::PathFilter;

/// When a rule runs relative to the main transform chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulePhase {
    /// Before the main chain, against untransformed source.
    Pre,
    /// The main source-to-artifact chain.
    #[default]
    Normal,
    /// After the main chain, against produced output.
    Post,
}

/// One step in a transform chain: a named transformer plus its options.
///
/// Options are an ordered map so serialized configurations compare and
/// diff deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformStep {
    pub name: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
}

impl TransformStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: IndexMap::new(),
        }
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// A transform rule: a path predicate, a phase, and an ordered step chain.
///
/// Listing order is application order: the first listed step sees the
/// source first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRule {
    /// Stable identifier, used in diagnostics and `explain` output.
    pub name: String,

    #[serde(default)]
    pub phase: RulePhase,

    pub test: PathFilter,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<PathFilter>,

    pub steps: Vec<TransformStep>,
}

impl TransformRule {
    pub fn new(name: impl Into<String>, test: PathFilter) -> Self {
        Self {
            name: name.into(),
            phase: RulePhase::Normal,
            test,
            exclude: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn phase(mut self, phase: RulePhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn exclude(mut self, filter: PathFilter) -> Self {
        self.exclude.push(filter);
        self
    }

    pub fn step(mut self, step: TransformStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Whether this rule selects the given path: the test matches and no
    /// exclusion does.
    pub fn applies_to(&self, path: &str) -> bool {
        self.test.matches(path) && !self.exclude.iter().any(|ex| ex.matches(path))
    }
}
