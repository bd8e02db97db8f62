//! Construction of the canonical transform rule set.

use crate::layout::ProjectLayout;
use crate::output::OutputNaming;
use crate::pattern::PathFilter;
use crate::rules::{RulePhase, TransformRule, TransformStep};

/// Extensions handled by the script transform chain.
const SCRIPT_EXTENSIONS: [&str; 3] = ["js", "ts", "tsx"];

/// Extensions handled by the markup transform.
const MARKUP_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Extensions emitted as opaque assets.
const ASSET_EXTENSIONS: [&str; 10] = [
    "png", "jpg", "jpeg", "gif", "svg", "woff", "woff2", "ttf", "eot", "ico",
];

/// Build the transform rule set for one assembly.
///
/// The environment enters only through `naming`; everything else is layout.
/// Identical inputs produce an identical rule list, and `workers` is passed
/// in rather than read from the machine so assembly stays deterministic.
pub fn build_rules(
    naming: &OutputNaming,
    layout: &ProjectLayout,
    workers: usize,
) -> Vec<TransformRule> {
    let scripts = || PathFilter::extensions(SCRIPT_EXTENSIONS);
    let vendored = || PathFilter::contains(layout.vendor_marker.clone());

    let rules = vec![
        // Sees untransformed source; conditional-compilation directives are
        // resolved before anything else reads the file.
        TransformRule::new("preprocess", scripts())
            .phase(RulePhase::Pre)
            .exclude(vendored())
            .step(TransformStep::new("preprocess")),
        // Re-processes position maps already embedded in emitted .js so
        // diagnostics point at original sources.
        TransformRule::new("emitted-sourcemaps", PathFilter::extensions(["js"]))
            .phase(RulePhase::Pre)
            .step(TransformStep::new("sourcemap")),
        // The main script chain. Type checking is out-of-band (the TypeCheck
        // plugin), so the compile step stays transpile-only.
        TransformRule::new("script-sources", scripts())
            .exclude(vendored())
            .step(TransformStep::new("cache"))
            .step(TransformStep::new("parallel").option("workers", workers))
            .step(TransformStep::new("downlevel").option("cache_directory", true))
            .step(TransformStep::new("typescript").option("transpile_only", true)),
        // The root document is the injection template, never a module.
        TransformRule::new("markup-templates", PathFilter::extensions(MARKUP_EXTENSIONS))
            .exclude(PathFilter::suffix(layout.root_document_name().to_string()))
            .step(
                TransformStep::new("markup")
                    .option("esm_default", true)
                    .option("minimize", true),
            ),
        TransformRule::new("stylesheets", PathFilter::extensions(["scss"]))
            .step(TransformStep::new("css"))
            .step(TransformStep::new("sass"))
            .step(TransformStep::new("resources").option(
                "resources",
                layout.style_resources.to_string_lossy().into_owned(),
            )),
        TransformRule::new("binary-assets", PathFilter::extensions(ASSET_EXTENSIONS)).step(
            TransformStep::new("emit-file").option("name", naming.asset_template()),
        ),
    ];

    tracing::debug!("built {} transform rules", rules.len());
    rules
}
