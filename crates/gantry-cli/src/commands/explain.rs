//! Explain command implementation.
//!
//! Answers "what does the configuration do with this file?" for a single
//! path: substitution, transform rules, chunk classification, watcher
//! exemptions.

use crate::cli::ExplainArgs;
use crate::config::ProjectManifest;
use crate::error::Result;
use gantry_config::RulePhase;

/// Execute the explain command.
///
/// Prints the report to stdout, one finding per line, so output stays
/// greppable.
pub fn execute(args: ExplainArgs) -> Result<()> {
    let manifest = ProjectManifest::load(args.manifest.as_deref())?;
    let env_name = args
        .env
        .as_deref()
        .unwrap_or(&manifest.assembly.environment);
    let config = manifest.assembler().assemble_named(env_name)?;
    let path = args.path.as_str();

    println!("{path} (environment '{env_name}')");

    // Environment-specific module substitution
    let rewritten = config.resolve.substitute(path, &config.environment);
    if rewritten != path {
        println!("  resolves as {rewritten}");
    }

    // Transform rules, in declaration order
    let mut any_rule = false;
    for rule in &config.rules {
        if rule.applies_to(path) {
            any_rule = true;
            let steps = rule
                .steps
                .iter()
                .map(|step| step.name.as_str())
                .collect::<Vec<_>>()
                .join(" -> ");
            println!(
                "  rule '{}' [{}]: {steps}",
                rule.name,
                phase_label(rule.phase)
            );
        }
    }
    if !any_rule {
        println!("  no transform rule selects this path");
    }

    // Chunk classification
    let chunk = if config.chunks.is_vendor(path) {
        "vendor"
    } else {
        "app"
    };
    println!("  chunk: {chunk}");

    // Watcher exemptions
    if config.watch_ignore.iter().any(|filter| filter.matches(path)) {
        println!("  ignored by the file watcher");
    }

    Ok(())
}

fn phase_label(phase: RulePhase) -> &'static str {
    match phase {
        RulePhase::Pre => "pre",
        RulePhase::Normal => "normal",
        RulePhase::Post => "post",
    }
}
