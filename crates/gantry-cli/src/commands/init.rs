//! Init command implementation.
//!
//! Writes a starter gantry.toml so a project starts from an editable
//! manifest instead of memorizing field names.

use crate::cli::InitArgs;
use crate::config::{ProjectManifest, MANIFEST_FILE};
use crate::error::{CliError, ManifestError, Result, ResultExt};
use crate::ui;

/// Execute the init command.
///
/// # Errors
///
/// Refuses to overwrite an existing manifest unless --force is set.
pub fn execute(args: InitArgs) -> Result<()> {
    let path = args.dir.join(MANIFEST_FILE);
    if path.exists() && !args.force {
        return Err(ManifestError::AlreadyExists(path).into());
    }

    let manifest = ProjectManifest::default();
    let rendered = toml::to_string_pretty(&manifest)
        .map_err(|e| CliError::Custom(format!("failed to render manifest: {e}")))?;
    let contents = format!(
        "# gantry project manifest\n# Fields omitted here fall back to their defaults.\n\n{rendered}"
    );

    std::fs::create_dir_all(&args.dir).with_path(&args.dir)?;
    std::fs::write(&path, contents).with_path(&path)?;

    ui::success(&format!("Wrote {}", path.display()));
    ui::info("Edit the layout to match your project, then run 'gantry assemble'");
    Ok(())
}
