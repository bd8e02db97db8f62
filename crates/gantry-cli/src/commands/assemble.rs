//! Assemble command implementation.
//!
//! Assembles the configuration for the target environment and emits it as
//! JSON, to stdout by default so the output can be piped into other tools.

use crate::cli::AssembleArgs;
use crate::config::ProjectManifest;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the assemble command.
///
/// # Steps
///
/// 1. Load the project manifest (gantry.toml, if present)
/// 2. Apply CLI overrides (--workers, --dry-run-clean)
/// 3. Assemble and validate the configuration for the target environment
/// 4. Emit JSON to stdout or --out
///
/// # Errors
///
/// Returns errors for a malformed manifest, an invalid environment name,
/// or a configuration that fails structural validation.
pub fn execute(args: AssembleArgs) -> Result<()> {
    let manifest = ProjectManifest::load(args.manifest.as_deref())?;

    let mut assembler = manifest.assembler();
    if let Some(workers) = args.workers {
        assembler = assembler.workers(workers);
    }
    if args.dry_run_clean {
        assembler = assembler.clean_dry_run(true);
    }

    let env_name = args
        .env
        .as_deref()
        .unwrap_or(&manifest.assembly.environment);
    tracing::debug!("assembling configuration for environment {env_name}");
    let config = assembler.assemble_named(env_name)?;

    let value = config.to_value()?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, json + "\n").with_path(path)?;
            ui::success(&format!(
                "Wrote configuration for '{env_name}' to {}",
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
