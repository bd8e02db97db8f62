//! Module resolution options: extension lookup order and request rewriting.
//!
//! The resolver itself lives in the bundling engine. This module only
//! assembles what the engine is told: which extensions to try when an import
//! omits one, and which module requests to rewrite before resolution.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::pattern::PathFilter;

/// The logical module every piece of app code imports for its environment
/// configuration. Requests reach the resolver with a path prefix, so the
/// match requires a leading separator while the rewrite targets the bare
/// sentinel.
pub const ENVIRONMENT_MODULE: &str = "environments/environment";

/// Resolution options handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried in order for extensionless imports. Earlier entries
    /// shadow later ones when several candidate files share a base name.
    pub extensions: Vec<String>,

    /// Request rewrites applied before resolution, first match wins.
    pub substitutions: Vec<SubstitutionRule>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            substitutions: vec![SubstitutionRule::environment_config()],
        }
    }
}

/// Packaging-specific script variants first, then generic script, markup,
/// style, and data files.
fn default_extensions() -> Vec<String> {
    [
        ".bundle.js",
        ".web.js",
        ".ts",
        ".tsx",
        ".js",
        ".scss",
        ".html",
        ".json",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl ResolveOptions {
    /// Rewrite a module request for the given environment.
    ///
    /// The first matching substitution applies; non-matching requests pass
    /// through untouched and unallocated. Pure: the same inputs always
    /// produce the same output, so the engine may call this per resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use gantry_config::{Environment, ResolveOptions};
    ///
    /// let resolve = ResolveOptions::default();
    /// let out = resolve.substitute("./environments/environment", &Environment::production());
    /// assert_eq!(out, "./environments/environment.prod");
    /// ```
    pub fn substitute<'a>(&self, request: &'a str, env: &Environment) -> Cow<'a, str> {
        for rule in &self.substitutions {
            if rule.pattern.matches(request) {
                return rule.rewrite.apply(request, env);
            }
        }
        Cow::Borrowed(request)
    }
}

/// One request-rewriting rule: a predicate plus the rewrite it triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub pattern: PathFilter,
    pub rewrite: Rewrite,
}

impl SubstitutionRule {
    /// The built-in environment-config indirection.
    pub fn environment_config() -> Self {
        Self {
            pattern: PathFilter::contains(format!("/{ENVIRONMENT_MODULE}")),
            rewrite: Rewrite::EnvironmentSuffix {
                base: ENVIRONMENT_MODULE.to_string(),
            },
        }
    }
}

/// How a matched request is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rewrite {
    /// Point `base` at its environment-specific variant: the unqualified
    /// base for dev, `base.{name}` for every other environment.
    EnvironmentSuffix { base: String },

    /// Replace the first occurrence of `from` with `to`.
    Replace { from: String, to: String },
}

impl Rewrite {
    fn apply<'a>(&self, request: &'a str, env: &Environment) -> Cow<'a, str> {
        match self {
            Self::EnvironmentSuffix { base } => {
                if env.is_development() || !request.contains(base.as_str()) {
                    return Cow::Borrowed(request);
                }
                let variant = format!("{base}.{env}");
                Cow::Owned(request.replacen(base.as_str(), &variant, 1))
            }
            Self::Replace { from, to } => {
                if request.contains(from.as_str()) {
                    Cow::Owned(request.replacen(from.as_str(), to, 1))
                } else {
                    Cow::Borrowed(request)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extension_order_is_stable() {
        let resolve = ResolveOptions::default();
        assert_eq!(
            resolve.extensions,
            vec![".bundle.js", ".web.js", ".ts", ".tsx", ".js", ".scss", ".html", ".json"]
        );
    }

    #[test]
    fn dev_keeps_unqualified_environment_module() {
        let resolve = ResolveOptions::default();
        let env = Environment::development();
        let out = resolve.substitute("./environments/environment", &env);
        assert_eq!(out, "./environments/environment");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn non_dev_appends_environment_suffix() {
        let resolve = ResolveOptions::default();
        for name in ["prod", "staging", "qa"] {
            let env = Environment::new(name).unwrap();
            let out = resolve.substitute("../environments/environment", &env);
            assert_eq!(out, format!("../environments/environment.{name}"));
        }
    }

    #[test]
    fn prefix_of_request_is_preserved() {
        let resolve = ResolveOptions::default();
        let env = Environment::production();
        let out = resolve.substitute("./src/app/environments/environment", &env);
        assert_eq!(out, "./src/app/environments/environment.prod");
    }

    #[test]
    fn non_matching_request_passes_through_borrowed() {
        let resolve = ResolveOptions::default();
        let env = Environment::production();
        let out = resolve.substitute("./app/services/config", &env);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "./app/services/config");
    }

    #[test]
    fn first_matching_rule_wins() {
        let mut resolve = ResolveOptions::default();
        resolve.substitutions.insert(
            0,
            SubstitutionRule {
                pattern: PathFilter::contains("/environments/environment"),
                rewrite: Rewrite::Replace {
                    from: "environments/environment".to_string(),
                    to: "environments/frozen".to_string(),
                },
            },
        );
        let env = Environment::production();
        let out = resolve.substitute("./environments/environment", &env);
        assert_eq!(out, "./environments/frozen");
    }

    #[test]
    fn replace_rewrites_first_occurrence_only() {
        let rewrite = Rewrite::Replace {
            from: "lib".to_string(),
            to: "vendor".to_string(),
        };
        let env = Environment::development();
        assert_eq!(rewrite.apply("./lib/lib.js", &env), "./vendor/lib.js");
    }

    #[test]
    fn substitution_is_repeatable() {
        let resolve = ResolveOptions::default();
        let env = Environment::production();
        let a = resolve.substitute("./environments/environment", &env);
        let b = resolve.substitute("./environments/environment", &env);
        assert_eq!(a, b);
    }
}
