//! Tests for endpoint and timeout validation.

use std::time::Duration;

use rstest::rstest;

use crate::ScholarDeskConfig;
use crate::articles::ArticleError;

#[rstest]
fn default_endpoint_targets_local_collection() {
    let endpoint = ScholarDeskConfig::default()
        .endpoint()
        .expect("default endpoint should parse");

    assert_eq!(
        endpoint.collection_url().as_str(),
        "http://localhost:8080/articles"
    );
}

#[rstest]
#[case::not_a_url("not a url")]
#[case::wrong_scheme("ftp://files.example")]
fn rejects_unusable_base_url(#[case] base_url: &str) {
    let config = ScholarDeskConfig {
        base_url: base_url.to_owned(),
        ..ScholarDeskConfig::default()
    };

    let result = config.endpoint();

    assert!(
        matches!(result, Err(ArticleError::InvalidUrl(_))),
        "expected InvalidUrl for {base_url}, got {result:?}"
    );
}

#[rstest]
fn rejects_zero_timeout() {
    let config = ScholarDeskConfig {
        request_timeout_seconds: 0,
        ..ScholarDeskConfig::default()
    };

    assert!(matches!(
        config.request_timeout(),
        Err(ArticleError::Configuration { .. })
    ));
}

#[rstest]
fn converts_timeout_to_duration() {
    let config = ScholarDeskConfig {
        request_timeout_seconds: 7,
        ..ScholarDeskConfig::default()
    };

    assert_eq!(config.request_timeout(), Ok(Duration::from_secs(7)));
}

#[rstest]
#[case::unset(None, None)]
#[case::blank(Some("  "), None)]
#[case::set(Some("out.html"), Some("out.html"))]
fn html_output_ignores_blank_paths(#[case] value: Option<&str>, #[case] expected: Option<&str>) {
    let config = ScholarDeskConfig {
        html_output: value.map(str::to_owned),
        ..ScholarDeskConfig::default()
    };

    assert_eq!(config.html_output(), expected);
}
