//! Layer builders shared by the configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::ShowcaseConfig;

/// Configuration source, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `layers` in order and returns the resulting configuration.
pub fn merge_layers(layers: &[(Layer, Value)]) -> ShowcaseConfig {
    let mut composer = MergeComposer::new();
    for (layer, value) in layers.iter().cloned() {
        match layer {
            Layer::Defaults => composer.push_defaults(value),
            Layer::File => composer.push_file(value, None),
            Layer::Environment => composer.push_environment(value),
            Layer::Cli => composer.push_cli(value),
        }
    }
    ShowcaseConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}
