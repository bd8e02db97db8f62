//! Declarative path matching.
//!
//! Transform rules, watch ignores, and the chunk classifier all decide
//! whether a module path is in scope. Matching is expressed as data rather
//! than compiled patterns so assembled configurations stay comparable and
//! serializable.

use serde::{Deserialize, Serialize};

/// Normalize a module path for matching.
///
/// Paths coming out of a resolver may carry platform separators; matching is
/// always done against forward slashes.
pub(crate) fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// A predicate over module paths.
///
/// # Example
///
/// ```
/// use gantry_config::PathFilter;
///
/// let scripts = PathFilter::extensions(["ts", "tsx"]);
/// assert!(scripts.matches("src/app/main.ts"));
/// assert!(!scripts.matches("src/app/main.rs"));
///
/// let vendored = PathFilter::contains("node_modules");
/// assert!(vendored.matches("node_modules/lodash/index.js"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathFilter {
    /// Matches when the path ends in one of these extensions (no leading dot).
    Extensions(Vec<String>),
    /// Matches when the fragment appears anywhere in the path.
    Contains(String),
    /// Matches when the path ends with the given suffix.
    Suffix(String),
    /// Matches every path.
    Any,
}

impl PathFilter {
    pub fn extensions<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Extensions(
            exts.into_iter()
                .map(|e| e.into().trim_start_matches('.').to_string())
                .collect(),
        )
    }

    pub fn contains(fragment: impl Into<String>) -> Self {
        Self::Contains(fragment.into())
    }

    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::Suffix(suffix.into())
    }

    /// Whether the filter matches the given module path.
    pub fn matches(&self, path: &str) -> bool {
        let path = normalize(path);
        match self {
            Self::Extensions(exts) => exts.iter().any(|ext| has_extension(&path, ext)),
            Self::Contains(fragment) => path.contains(fragment.as_str()),
            Self::Suffix(suffix) => path.ends_with(suffix.as_str()),
            Self::Any => true,
        }
    }

    /// Whether the filter can never match anything.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Extensions(exts) if exts.is_empty())
    }
}

/// Extension match with a dot boundary: `main.ts` matches `ts`, `main.mts`
/// does not.
fn has_extension(path: &str, ext: &str) -> bool {
    path.len() > ext.len() + 1
        && path.ends_with(ext)
        && path.as_bytes()[path.len() - ext.len() - 1] == b'.'
}
