//! Shared utilities for command implementations.

use std::path::{Path, PathBuf};

/// Resolve a path relative to a project root.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the root.
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Directory that relative project paths are resolved against.
///
/// An explicit `--manifest somewhere/gantry.toml` anchors the project at
/// `somewhere/`; without one the current directory is the project root.
pub fn project_root(manifest_path: Option<&Path>) -> PathBuf {
    manifest_path
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
