//! Project layout: the environment-independent filesystem contract.
//!
//! Everything here describes where a project keeps its sources and where
//! artifacts land. The assembler reads these paths; it never touches the
//! filesystem itself.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filesystem layout of the project being assembled.
///
/// All fields default to the conventional single-page-app arrangement, so a
/// manifest only needs to name what deviates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Application entry module.
    pub app_entry: PathBuf,

    /// Vendor entry module (third-party imports bundled separately).
    pub vendor_entry: PathBuf,

    /// Directories removed by the cleanup plugin before a build. The first
    /// entry is the primary output directory.
    pub output_dirs: Vec<PathBuf>,

    /// The root HTML document. Exempt from markup transformation; the
    /// injection plugin uses it as its template.
    pub root_document: PathBuf,

    /// Web-app manifest copied verbatim into the output.
    pub manifest: PathBuf,

    /// Localization bundles, copied as a directory.
    pub i18n_dir: PathBuf,

    /// Static images, copied as a directory.
    pub images_dir: PathBuf,

    /// Global style resources injected into every stylesheet compilation.
    pub style_resources: PathBuf,

    /// Source root, watched by the type checker.
    pub source_root: PathBuf,

    /// Path fragment identifying vendored third-party modules.
    pub vendor_marker: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            app_entry: default_app_entry(),
            vendor_entry: default_vendor_entry(),
            output_dirs: default_output_dirs(),
            root_document: default_root_document(),
            manifest: default_manifest(),
            i18n_dir: default_i18n_dir(),
            images_dir: default_images_dir(),
            style_resources: default_style_resources(),
            source_root: default_source_root(),
            vendor_marker: default_vendor_marker(),
        }
    }
}

fn default_app_entry() -> PathBuf {
    PathBuf::from("src/main.ts")
}

fn default_vendor_entry() -> PathBuf {
    PathBuf::from("src/vendor.ts")
}

fn default_output_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("dist"), PathBuf::from("build")]
}

fn default_root_document() -> PathBuf {
    PathBuf::from("src/index.html")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("src/manifest.json")
}

fn default_i18n_dir() -> PathBuf {
    PathBuf::from("src/assets/i18n")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("src/assets/imgs")
}

fn default_style_resources() -> PathBuf {
    PathBuf::from("src/styles/resources.scss")
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_vendor_marker() -> String {
    "node_modules".to_string()
}

impl ProjectLayout {
    /// File name of the root document, used when matching it against
    /// markup-rule exclusions.
    pub fn root_document_name(&self) -> &str {
        self.root_document
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let layout = ProjectLayout::default();
        assert_eq!(layout.app_entry, PathBuf::from("src/main.ts"));
        assert_eq!(layout.vendor_entry, PathBuf::from("src/vendor.ts"));
        assert_eq!(layout.output_dirs.first(), Some(&PathBuf::from("dist")));
        assert_eq!(layout.root_document_name(), "index.html");
        assert_eq!(layout.vendor_marker, "node_modules");
    }

    #[test]
    fn partial_manifest_fills_remaining_defaults() {
        let layout: ProjectLayout =
            serde_json::from_str(r#"{"app_entry": "src/boot.tsx"}"#).unwrap();
        assert_eq!(layout.app_entry, PathBuf::from("src/boot.tsx"));
        assert_eq!(layout.vendor_entry, PathBuf::from("src/vendor.ts"));
        assert_eq!(layout.style_resources, PathBuf::from("src/styles/resources.scss"));
    }
}
