use pretty_assertions::assert_eq;

use crate::common::unreachable_settings;
use server::api::{console_dev_tools_impl, console_query_rules_impl};

#[test]
fn dev_tools_link_appends_the_console_path() {
    let settings = unreachable_settings();

    let response = console_dev_tools_impl(&settings);

    assert!(response.success);
    assert_eq!(
        response.url.as_deref(),
        Some("http://console.test/app/dev_tools#/console")
    );
}

#[test]
fn query_rules_link_appends_the_rules_path() {
    let settings = unreachable_settings();

    let response = console_query_rules_impl(&settings);

    assert!(response.success);
    assert_eq!(
        response.url.as_deref(),
        Some("http://console.test/app/elasticsearch/query_rules")
    );
}

#[test]
fn missing_console_url_is_reported() {
    let mut settings = unreachable_settings();
    settings.console_url = None;

    let response = console_dev_tools_impl(&settings);

    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("Console URL is not configured")
    );
}
