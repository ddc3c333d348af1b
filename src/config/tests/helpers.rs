//! Shared test helpers for configuration tests.

use std::ffi::OsString;

use ortho_config::{MergeComposer, OrthoConfig};
use serde_json::Value;

use crate::ScholarDeskConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Composes a [`ScholarDeskConfig`] from a sequence of `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> ScholarDeskConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    ScholarDeskConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Loads configuration from `cli_args` with the environment overridden and
/// configuration discovery pointed at an empty directory.
pub fn load_with_environment(
    environment: &[(&str, Option<&str>)],
    cli_args: &[&str],
) -> ScholarDeskConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().into_owned();

    let mut overrides: Vec<(&str, Option<&str>)> = vec![
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ];
    overrides.extend_from_slice(environment);
    let _guard = env_lock::lock_env(overrides);

    let mut args: Vec<OsString> = vec![OsString::from("scholar-desk")];
    args.extend(cli_args.iter().map(OsString::from));

    ScholarDeskConfig::load_from_iter(args).expect("config should load")
}
