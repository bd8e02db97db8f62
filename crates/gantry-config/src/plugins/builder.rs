//! Construction of the canonical plugin pipeline.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::layout::ProjectLayout;
use crate::output::OutputNaming;
use crate::plugins::{
    CleanOptions, CopyAssetsOptions, CopyPair, ExposeGlobalsOptions, ExtractStylesOptions,
    InjectAt, InjectDocumentOptions, PluginSpec, SplitChunksOptions, StyleLintOptions,
    TypeCheckOptions,
};

/// Name of the chunk holding vendored modules.
const VENDOR_CHUNK: &str = "vendor";

/// Build the canonical plugin pipeline, unscheduled.
///
/// Callers pass the result through [`crate::plugins::schedule`]; listing
/// order here only breaks ties between unrelated plugins.
pub fn build_plugins(
    naming: &OutputNaming,
    layout: &ProjectLayout,
    clean_dry_run: bool,
) -> Vec<PluginSpec> {
    let mut globals = IndexMap::new();
    globals.insert(
        "jquery".to_string(),
        vec!["$".to_string(), "jQuery".to_string()],
    );
    globals.insert("popper.js".to_string(), vec!["Popper".to_string()]);

    let plugins = vec![
        PluginSpec::Clean(CleanOptions {
            targets: layout.output_dirs.clone(),
            verbose: true,
            dry_run: clean_dry_run,
        }),
        PluginSpec::CopyAssets(CopyAssetsOptions {
            pairs: vec![
                CopyPair {
                    from: layout.root_document.clone(),
                    to: None,
                },
                CopyPair {
                    from: layout.manifest.clone(),
                    to: None,
                },
                CopyPair {
                    from: layout.i18n_dir.clone(),
                    to: Some(copy_destination(layout, &layout.i18n_dir)),
                },
                CopyPair {
                    from: layout.images_dir.clone(),
                    to: Some(copy_destination(layout, &layout.images_dir)),
                },
            ],
        }),
        PluginSpec::TypeCheck(TypeCheckOptions {
            watch: vec![layout.source_root.clone()],
            syntactic_errors: true,
            lint: true,
        }),
        PluginSpec::StyleLint(StyleLintOptions::default()),
        PluginSpec::ExposeGlobals(ExposeGlobalsOptions { globals }),
        PluginSpec::ExtractStyles(ExtractStylesOptions {
            filename: naming.stylesheet_template(),
        }),
        PluginSpec::InjectDocument(InjectDocumentOptions {
            template: layout.root_document.clone(),
            inject_at: InjectAt::Head,
        }),
        PluginSpec::SplitChunks(SplitChunksOptions {
            chunk_name: VENDOR_CHUNK.to_string(),
        }),
    ];

    tracing::debug!("built {} plugins", plugins.len());
    plugins
}

/// Copied directories land at their source-root-relative path, so
/// `src/assets/i18n` arrives at `assets/i18n`.
fn copy_destination(layout: &ProjectLayout, dir: &Path) -> PathBuf {
    dir.strip_prefix(&layout.source_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Environment;

    fn canonical() -> Vec<PluginSpec> {
        build_plugins(
            &OutputNaming::for_environment(&Environment::development()),
            &ProjectLayout::default(),
            false,
        )
    }

    #[test]
    fn pipeline_declares_each_kind_once() {
        let plugins = canonical();
        assert_eq!(plugins.len(), 8);
        for (i, plugin) in plugins.iter().enumerate() {
            assert!(
                !plugins[..i].iter().any(|p| p.kind() == plugin.kind()),
                "{} declared twice",
                plugin.kind()
            );
        }
    }

    #[test]
    fn copy_pairs_cover_document_manifest_and_asset_dirs() {
        let plugins = canonical();
        let Some(PluginSpec::CopyAssets(copy)) = plugins
            .iter()
            .find(|p| matches!(p, PluginSpec::CopyAssets(_)))
        else {
            panic!("missing copy plugin");
        };

        assert_eq!(copy.pairs.len(), 4);
        assert_eq!(copy.pairs[0].from, PathBuf::from("src/index.html"));
        assert_eq!(copy.pairs[0].to, None);
        assert_eq!(copy.pairs[2].to, Some(PathBuf::from("assets/i18n")));
        assert_eq!(copy.pairs[3].to, Some(PathBuf::from("assets/imgs")));
    }

    #[test]
    fn exposed_globals_match_vendor_shims() {
        let plugins = canonical();
        let Some(PluginSpec::ExposeGlobals(expose)) = plugins
            .iter()
            .find(|p| matches!(p, PluginSpec::ExposeGlobals(_)))
        else {
            panic!("missing expose plugin");
        };

        assert_eq!(expose.globals["jquery"], vec!["$", "jQuery"]);
        assert_eq!(expose.globals["popper.js"], vec!["Popper"]);
    }

    #[test]
    fn extract_filename_tracks_environment() {
        let prod = build_plugins(
            &OutputNaming::for_environment(&Environment::production()),
            &ProjectLayout::default(),
            false,
        );
        let Some(PluginSpec::ExtractStyles(extract)) = prod
            .iter()
            .find(|p| matches!(p, PluginSpec::ExtractStyles(_)))
        else {
            panic!("missing extract plugin");
        };
        assert_eq!(extract.filename, "[name].[hash].css");
    }

    #[test]
    fn dry_run_flag_reaches_clean() {
        let plugins = build_plugins(
            &OutputNaming::for_environment(&Environment::development()),
            &ProjectLayout::default(),
            true,
        );
        let Some(PluginSpec::Clean(clean)) =
            plugins.iter().find(|p| matches!(p, PluginSpec::Clean(_)))
        else {
            panic!("missing clean plugin");
        };
        assert!(clean.dry_run);
        assert_eq!(clean.targets, vec![PathBuf::from("dist"), PathBuf::from("build")]);
    }

    #[test]
    fn custom_source_root_rebases_copy_destinations() {
        let layout = ProjectLayout {
            source_root: PathBuf::from("web"),
            i18n_dir: PathBuf::from("web/assets/i18n"),
            ..ProjectLayout::default()
        };
        let dest = copy_destination(&layout, &layout.i18n_dir);
        assert_eq!(dest, PathBuf::from("assets/i18n"));
    }
}
