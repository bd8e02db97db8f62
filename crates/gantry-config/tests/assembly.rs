//! End-to-end assembly scenarios: the full configuration a dev or prod
//! build hands to the engine.

use gantry_config::{
    Assembler, Environment, PluginKind, PluginSpec, ProjectLayout, RulePhase, SourceMaps,
};

fn dev_config() -> gantry_config::BuildConfig {
    Assembler::new(ProjectLayout::default())
        .workers(3)
        .assemble(&Environment::development())
        .expect("dev assembly")
}

#[test]
fn dev_scenario_carries_full_plugin_inventory() {
    let config = dev_config();

    let kinds: Vec<PluginKind> = config.plugins.iter().map(PluginSpec::kind).collect();
    for expected in [
        PluginKind::Clean,
        PluginKind::CopyAssets,
        PluginKind::TypeCheck,
        PluginKind::StyleLint,
        PluginKind::ExposeGlobals,
        PluginKind::ExtractStyles,
        PluginKind::InjectDocument,
        PluginKind::SplitChunks,
    ] {
        assert_eq!(
            kinds.iter().filter(|k| **k == expected).count(),
            1,
            "expected exactly one {expected}"
        );
    }

    let copy = config
        .plugins
        .iter()
        .find_map(|p| match p {
            PluginSpec::CopyAssets(opts) => Some(opts),
            _ => None,
        })
        .expect("copy plugin");
    assert_eq!(copy.pairs.len(), 4);
}

#[test]
fn clean_runs_first_and_inject_document_waits_for_artifacts() {
    let config = dev_config();
    let pos = |kind: PluginKind| {
        config
            .plugins
            .iter()
            .position(|p| p.kind() == kind)
            .expect("kind present")
    };

    assert_eq!(pos(PluginKind::Clean), 0);
    assert!(pos(PluginKind::InjectDocument) > pos(PluginKind::ExtractStyles));
    assert!(pos(PluginKind::InjectDocument) > pos(PluginKind::SplitChunks));
}

#[test]
fn script_rules_exclude_the_vendor_directory() {
    let config = dev_config();
    let vendored = "node_modules/jquery/dist/jquery.js";

    for rule in config.rules.iter().filter(|r| r.name != "emitted-sourcemaps") {
        assert!(
            !rule.applies_to(vendored),
            "rule '{}' must not transform vendored sources",
            rule.name
        );
    }
}

#[test]
fn markup_rule_skips_the_root_document() {
    let config = dev_config();
    let markup = config
        .rules
        .iter()
        .find(|r| r.name == "markup-templates")
        .expect("markup rule");

    assert!(markup.applies_to("src/app/views/table.html"));
    assert!(!markup.applies_to("src/index.html"));
}

#[test]
fn pre_phase_rules_come_with_the_normal_chain() {
    let config = dev_config();
    let phases: Vec<RulePhase> = config.rules.iter().map(|r| r.phase).collect();
    assert!(phases.contains(&RulePhase::Pre));
    assert!(phases.contains(&RulePhase::Normal));
}

#[test]
fn naming_embeds_hash_only_in_prod() {
    let assembler = Assembler::new(ProjectLayout::default()).workers(2);

    let prod = assembler
        .assemble(&Environment::production())
        .expect("prod assembly");
    assert_eq!(prod.naming.script_template(), "[name].[hash].js");

    for name in ["dev", "staging", "qa"] {
        let config = assembler
            .assemble(&Environment::new(name).expect("valid name"))
            .expect("assembly");
        assert_eq!(
            config.naming.script_template(),
            "[name].js",
            "non-prod '{name}' must not hash"
        );
    }
}

#[test]
fn vendor_classification_handles_both_separators() {
    let config = dev_config();
    assert!(config.chunks.is_vendor("/repo/node_modules/lodash/index.js"));
    assert!(config.chunks.is_vendor(r"C:\repo\node_modules\lodash\index.js"));
    assert!(!config.chunks.is_vendor("/repo/src/app/main.ts"));
}

#[test]
fn source_maps_default_to_external() {
    assert_eq!(dev_config().source_maps, SourceMaps::External);
}

#[test]
fn custom_layout_flows_through_assembly() {
    let layout = ProjectLayout {
        app_entry: "web/boot.ts".into(),
        root_document: "web/app.html".into(),
        source_root: "web".into(),
        ..ProjectLayout::default()
    };
    let config = Assembler::new(layout)
        .workers(2)
        .assemble(&Environment::development())
        .expect("assembly");

    assert_eq!(config.entries["app"], std::path::PathBuf::from("web/boot.ts"));

    let markup = config
        .rules
        .iter()
        .find(|r| r.name == "markup-templates")
        .expect("markup rule");
    assert!(!markup.applies_to("web/app.html"));
    assert!(markup.applies_to("web/views/panel.html"));

    let inject = config
        .plugins
        .iter()
        .find_map(|p| match p {
            PluginSpec::InjectDocument(opts) => Some(opts),
            _ => None,
        })
        .expect("inject plugin");
    assert_eq!(inject.template, std::path::PathBuf::from("web/app.html"));
}

#[test]
fn watch_ignore_is_part_of_the_assembled_value() {
    let config = dev_config();
    let value = config.to_value().expect("serialize");
    let ignores = value["watch_ignore"].as_array().expect("array");
    assert_eq!(ignores.len(), 1);
    assert!(config.watch_ignore[0].matches("src/styles/app.scss.d.ts"));
}
