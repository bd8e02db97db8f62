//! Check command implementation.
//!
//! Validates the assembled configuration without emitting it.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::ProjectManifest;
use crate::error::Result;
use crate::ui;
use gantry_config::{BuildConfig, ConfigValidator, FsValidator, ProjectLayout};
use std::path::Path;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the project manifest
/// 2. Assemble the configuration for the target environment (structural
///    validation happens during assembly)
/// 3. Verify referenced paths exist on disk (if --paths flag)
/// 4. Report warnings (if --warnings flag)
///
/// # Errors
///
/// Returns errors for a malformed manifest, an invalid environment name,
/// or missing files when --paths is set. Warnings never affect the result.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let manifest = ProjectManifest::load(args.manifest.as_deref())?;
    let env_name = args
        .env
        .as_deref()
        .unwrap_or(&manifest.assembly.environment);
    let config = manifest.assembler().assemble_named(env_name)?;

    ui::success(&format!("Configuration for '{env_name}' is valid"));

    let root = utils::project_root(args.manifest.as_deref());

    // Check referenced paths if requested
    if args.paths {
        ui::info("Checking referenced paths...");
        FsValidator::new(&root).validate(&config)?;
        ui::success("All referenced paths exist");
    }

    // Report warnings if requested
    if args.warnings {
        ui::info("Checking for warnings...");
        let warnings = collect_warnings(&config, &manifest.layout, &root);
        if warnings.is_empty() {
            ui::info("No warnings found");
        } else {
            ui::warning(&format!("Found {} potential issues:", warnings.len()));
            for warning in &warnings {
                ui::warning(&format!("  - {warning}"));
            }
        }
    }

    ui::success("All checks passed");
    Ok(())
}

/// Collect advisory findings that don't block assembly.
fn collect_warnings(config: &BuildConfig, layout: &ProjectLayout, root: &Path) -> Vec<String> {
    let mut warnings = Vec::new();

    // A non-dev build rewrites the environment descriptor to a variant
    // module, which has to exist somewhere the resolver will find it
    if !config.environment.is_development() {
        let env = config.environment.as_str();
        let variant_dir = root.join(&layout.source_root).join("environments");
        let variant_exists = config
            .resolve
            .extensions
            .iter()
            .any(|ext| variant_dir.join(format!("environment.{env}{ext}")).is_file());
        if !variant_exists {
            warnings.push(format!(
                "no environment variant module for '{env}' under {}",
                variant_dir.display()
            ));
        }
    }

    // The stylesheet rule injects this file into every compilation
    let style_resources = root.join(&layout.style_resources);
    if !style_resources.is_file() {
        warnings.push(format!(
            "stylesheet resources not found: {}",
            style_resources.display()
        ));
    }

    // Cleanup removes output directories wholesale
    if layout.output_dirs.contains(&layout.source_root) {
        warnings.push(format!(
            "cleanup targets the source root '{}'",
            layout.source_root.display()
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_config::{Assembler, Environment};
    use std::fs;

    fn assembled(layout: &ProjectLayout, env: &Environment) -> BuildConfig {
        Assembler::new(layout.clone())
            .workers(2)
            .assemble(env)
            .unwrap()
    }

    #[test]
    fn warns_when_variant_module_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();
        let config = assembled(&layout, &Environment::production());

        let warnings = collect_warnings(&config, &layout, dir.path());
        assert!(warnings.iter().any(|w| w.contains("environment variant")));
    }

    #[test]
    fn variant_check_accepts_any_resolver_extension() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();
        let env_dir = dir.path().join("src/environments");
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(env_dir.join("environment.prod.ts"), "").unwrap();

        let config = assembled(&layout, &Environment::production());
        let warnings = collect_warnings(&config, &layout, dir.path());
        assert!(!warnings.iter().any(|w| w.contains("environment variant")));
    }

    #[test]
    fn dev_never_asks_for_a_variant() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();
        let config = assembled(&layout, &Environment::development());

        let warnings = collect_warnings(&config, &layout, dir.path());
        assert!(!warnings.iter().any(|w| w.contains("environment variant")));
    }

    #[test]
    fn warns_about_missing_style_resources() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();
        let config = assembled(&layout, &Environment::development());

        let warnings = collect_warnings(&config, &layout, dir.path());
        assert!(warnings.iter().any(|w| w.contains("stylesheet resources")));
    }

    #[test]
    fn clean_tree_produces_no_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::default();
        let styles = dir.path().join("src/styles");
        fs::create_dir_all(&styles).unwrap();
        fs::write(styles.join("resources.scss"), "").unwrap();

        let config = assembled(&layout, &Environment::development());
        assert!(collect_warnings(&config, &layout, dir.path()).is_empty());
    }

    #[test]
    fn warns_when_cleanup_would_remove_sources() {
        let dir = tempfile::tempdir().unwrap();
        let mut layout = ProjectLayout::default();
        layout.output_dirs.push(layout.source_root.clone());

        let config = assembled(&layout, &Environment::development());
        let warnings = collect_warnings(&config, &layout, dir.path());
        assert!(warnings.iter().any(|w| w.contains("source root")));
    }
}
