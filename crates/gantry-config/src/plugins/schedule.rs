//! Plugin scheduling from declared ordering relations.
//!
//! Execution order is derived, not hand-maintained: each plugin declares
//! which kinds it must run after, and the scheduler produces a total order
//! satisfying every relation. Among plugins with no relation between them,
//! listing order is preserved, so the result is deterministic.

use crate::error::{ConfigError, Result};
use crate::plugins::{PluginKind, PluginSpec};

/// Order a pipeline by its `runs_after` relations.
///
/// Relations naming kinds absent from the pipeline are satisfied vacuously.
/// A kind declared twice or a relation cycle is a configuration error.
pub fn schedule(plugins: Vec<PluginSpec>) -> Result<Vec<PluginSpec>> {
    let kinds: Vec<PluginKind> = plugins.iter().map(PluginSpec::kind).collect();

    for (i, kind) in kinds.iter().enumerate() {
        if kinds[..i].contains(kind) {
            return Err(ConfigError::DuplicatePlugin { kind: *kind });
        }
    }

    // Stable Kahn: always emit the earliest-listed plugin whose
    // prerequisites are all emitted.
    let n = plugins.len();
    let mut emitted = vec![false; n];
    let mut order = Vec::with_capacity(n);

    while order.len() < n {
        let next = (0..n).find(|&i| {
            !emitted[i]
                && plugins[i].runs_after().iter().all(|dep| {
                    kinds
                        .iter()
                        .position(|k| k == dep)
                        .is_none_or(|j| emitted[j])
                })
        });

        match next {
            Some(i) => {
                emitted[i] = true;
                order.push(i);
            }
            None => {
                let involved = kinds
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !emitted[*i])
                    .map(|(_, k)| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(ConfigError::PluginCycle { involved });
            }
        }
    }

    let mut rank = vec![0usize; n];
    for (pos, &i) in order.iter().enumerate() {
        rank[i] = pos;
    }
    let mut ranked: Vec<(usize, PluginSpec)> = plugins
        .into_iter()
        .enumerate()
        .map(|(i, plugin)| (rank[i], plugin))
        .collect();
    ranked.sort_by_key(|(r, _)| *r);

    tracing::debug!("scheduled {} plugins", n);
    Ok(ranked.into_iter().map(|(_, plugin)| plugin).collect())
}
