use dioxus::prelude::*;
use shared_types::ConsoleUrlResponse;

#[cfg(feature = "server")]
use crate::config::{self, EngineSettings};

#[cfg(feature = "server")]
fn console_link(settings: &EngineSettings, path: &str) -> ConsoleUrlResponse {
    match &settings.console_url {
        Some(base) => ConsoleUrlResponse {
            success: true,
            url: Some(format!("{}/{}", base.trim_end_matches('/'), path)),
            error: None,
        },
        None => ConsoleUrlResponse {
            success: false,
            url: None,
            error: Some("Console URL is not configured".to_string()),
        },
    }
}

#[cfg(feature = "server")]
pub fn console_dev_tools_impl(settings: &EngineSettings) -> ConsoleUrlResponse {
    console_link(settings, "app/dev_tools#/console")
}

#[cfg(feature = "server")]
pub fn console_query_rules_impl(settings: &EngineSettings) -> ConsoleUrlResponse {
    console_link(settings, "app/elasticsearch/query_rules")
}

/// Deep link to the management console's dev-tools page, for trying the
/// previewed query by hand.
#[server]
pub async fn console_dev_tools_url() -> Result<ConsoleUrlResponse, ServerFnError> {
    let settings = config::settings();
    Ok(console_dev_tools_impl(settings))
}

/// Deep link to the console page where query rulesets are managed.
#[server]
pub async fn console_query_rules_url() -> Result<ConsoleUrlResponse, ServerFnError> {
    let settings = config::settings();
    Ok(console_query_rules_impl(settings))
}
