//! Layer precedence and derived accessors.

use std::time::Duration;

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{Layer, merge_layers};
use crate::ShowcaseConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![(Layer::Defaults, json!({"interval_ms": 6000})), (Layer::File, json!({"interval_ms": 5000}))],
    5000,
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![(Layer::File, json!({"interval_ms": 5000})), (Layer::Environment, json!({"interval_ms": 4000}))],
    4000,
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![(Layer::Environment, json!({"interval_ms": 4000})), (Layer::Cli, json!({"interval_ms": 3000}))],
    3000,
    "CLI should override environment"
)]
fn interval_layer_precedence(
    #[case] layers: Vec<(Layer, Value)>,
    #[case] expected: u64,
    #[case] message: &str,
) {
    let config = merge_layers(&layers);

    assert_eq!(config.interval_ms, expected, "{message}");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let config = merge_layers(&[
        (
            Layer::Defaults,
            json!({"api_url": "https://default.example/api", "review_limit": 20}),
        ),
        (Layer::Cli, json!({"review_limit": 8})),
    ]);

    assert_eq!(
        config.api_url.as_deref(),
        Some("https://default.example/api"),
        "default api_url should be preserved"
    );
    assert_eq!(config.review_limit, 8, "CLI should override review_limit");
}

#[rstest]
fn defaults_match_reference_home_page() {
    let config = ShowcaseConfig::default();

    assert_eq!(config.slide_interval(), Duration::from_millis(6000));
    assert!(config.auto_play(), "hero rotates by default");
    assert!(!config.reduced_motion);
    assert_eq!(config.review_limit, 20);
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.api_url(), None);
}

#[rstest]
fn no_autoplay_disables_rotation() {
    let config = ShowcaseConfig {
        no_autoplay: true,
        ..ShowcaseConfig::default()
    };

    assert!(!config.auto_play());
}

#[rstest]
#[case::blank(Some("   "), None)]
#[case::padded(Some(" https://api.example.com "), Some("https://api.example.com"))]
#[case::absent(None, None)]
fn api_url_ignores_blank_values(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
    let config = ShowcaseConfig {
        api_url: raw.map(str::to_owned),
        ..ShowcaseConfig::default()
    };

    assert_eq!(config.api_url(), expected);
}

#[rstest]
fn review_query_requests_at_least_one_approved_review() {
    let config = ShowcaseConfig {
        review_limit: 0,
        ..ShowcaseConfig::default()
    };

    let query = config.review_query();

    assert!(query.approved_only);
    assert_eq!(query.limit, 1);
}
