//! Properties of the derived bundler configuration.

use sfe_config::{
    build_config, BuildMode, ConfigBuilder, DevtoolStrategy, LibraryTarget, ModePolicy,
    PluginKind, Target, LIBRARY_NAME,
};
use serde_json::json;
use std::path::{Path, PathBuf};

const MODES: [BuildMode; 2] = [BuildMode::Development, BuildMode::Production];

#[test]
fn derivation_is_deterministic() {
    for mode in MODES {
        assert_eq!(build_config(mode), build_config(mode));
    }
}

#[test]
fn hot_reload_only_in_development() {
    assert!(build_config(BuildMode::Development).has_plugin(PluginKind::HotModuleReplacement));
    assert!(!build_config(BuildMode::Production).has_plugin(PluginKind::HotModuleReplacement));
}

#[test]
fn ordering_and_define_present_in_every_mode() {
    for mode in MODES {
        let config = build_config(mode);
        assert!(config.has_plugin(PluginKind::OccurrenceOrder));
        assert!(config.has_plugin(PluginKind::Define));
    }
}

#[test]
fn devtool_follows_mode() {
    assert_eq!(
        build_config(BuildMode::Production).devtool,
        DevtoolStrategy::ExternalProduction
    );
    assert_eq!(build_config(BuildMode::Development).devtool, DevtoolStrategy::Inline);
}

#[test]
fn mode_string_matches_mode() {
    let value = build_config(BuildMode::Production).to_value().unwrap();
    assert_eq!(value["mode"], json!("production"));
    assert_eq!(value["devtool"], json!("source-map"));

    let value = build_config(BuildMode::Development).to_value().unwrap();
    assert_eq!(value["mode"], json!("development"));
    assert_eq!(value["devtool"], json!("inline-source-map"));
}

#[test]
fn define_injects_mode_and_dev_flag() {
    for mode in MODES {
        let config = build_config(mode);
        let define = config
            .plugins
            .iter()
            .find_map(|plugin| plugin.options())
            .expect("define plugin options");
        assert_eq!(define["process.env.NODE_ENV"], json!(mode.as_str()));
        assert_eq!(define["__DEV__"], json!(mode == BuildMode::Development));
    }
}

#[test]
fn seven_externals_with_four_aliases_each() {
    for mode in MODES {
        let config = build_config(mode);
        assert_eq!(config.externals.len(), 7);
        for (import, external) in &config.externals {
            assert!(
                external.aliases().iter().all(|alias| !alias.is_empty()),
                "external {import} is missing an alias"
            );
        }
        assert!(config.is_external("react-dom/server"));
        assert!(!config.is_external("lodash"));
    }
}

#[test]
fn three_rules_with_two_script_include_paths() {
    for mode in MODES {
        let config = build_config(mode);
        assert_eq!(config.rules().len(), 3);
        assert_eq!(config.rules()[0].include.len(), 2);
    }
}

#[test]
fn library_output_is_mode_independent() {
    for mode in MODES {
        let output = build_config(mode).output;
        assert_eq!(output.library, vec![LIBRARY_NAME.to_string()]);
        assert_eq!(output.library_target, LibraryTarget::Umd);
        assert_eq!(output.public_path, "/");
        assert_eq!(output.filename, "[name].js");
        assert_eq!(
            output.devtool_module_filename_template,
            "ScalableFormEditor:///[resourcePath]?[hash]"
        );
        assert_eq!(
            output.devtool_module_filename_template,
            output.devtool_fallback_module_filename_template
        );
    }
}

#[test]
fn fixed_target_and_resolve_extensions() {
    let config = build_config(BuildMode::Development);
    assert_eq!(config.target, Target::Web);
    assert_eq!(config.resolve.extensions, ["*", ".js", ".jsx"]);
}

#[test]
fn unknown_mode_falls_back_to_development_when_permissive() {
    let mode = BuildMode::resolve(Some("unknown-value"), ModePolicy::Permissive).unwrap();
    let fallback = build_config(mode);
    let development = build_config(BuildMode::Development);

    assert_eq!(fallback.devtool, development.devtool);
    assert_eq!(fallback.plugins, development.plugins);
}

#[test]
fn unknown_mode_is_rejected_when_strict() {
    assert!(BuildMode::resolve(Some("unknown-value"), ModePolicy::Strict).is_err());
}

#[test]
fn paths_are_anchored_at_builder_root() {
    let config = ConfigBuilder::new("/srv/editor").build(BuildMode::Production);
    assert_eq!(config.output.path, PathBuf::from("/srv/editor/build"));
    assert_eq!(
        config.rules()[0].include,
        vec![PathBuf::from("/srv/editor/src"), PathBuf::from("/srv/editor/demo")]
    );
}

#[test]
fn roots_only_change_paths() {
    let here = build_config(BuildMode::Development);
    let there = ConfigBuilder::new("/elsewhere").build(BuildMode::Development);
    assert_eq!(here.plugins, there.plugins);
    assert_eq!(here.externals, there.externals);
    assert_eq!(here.devtool, there.devtool);
    assert_ne!(here.output.path, there.output.path);
}

#[test]
fn rule_lookup_by_path() {
    let config = build_config(BuildMode::Development);

    let less = config.rule_for(Path::new("src/styles/editor.less")).unwrap();
    assert_eq!(less.chain, ["style-loader", "css-loader", "less-loader"]);

    let script = config.rule_for(Path::new("demo/index.jsx")).unwrap();
    assert_eq!(script.chain, ["babel-loader", "eslint-loader"]);

    assert!(config.rule_for(Path::new("README.md")).is_none());
}

#[test]
fn rule_lookup_with_absolute_root_accepts_relative_paths() {
    let config = ConfigBuilder::new("/work/editor").build(BuildMode::Production);

    let script = config.rule_for(Path::new("src/App.jsx")).unwrap();
    assert_eq!(script.chain, ["babel-loader", "eslint-loader"]);
    assert!(config.rule_for(Path::new("/work/editor/demo/index.js")).is_some());
    assert!(config.rule_for(Path::new("/work/other/src/App.jsx")).is_none());
}

#[test]
fn value_round_trip_preserves_config() {
    let config = build_config(BuildMode::Production);
    let restored = sfe_config::BundlerConfig::from_value(config.to_value().unwrap()).unwrap();
    assert_eq!(restored, config);
}
